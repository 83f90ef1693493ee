use policysim::projection::round2;
use policysim::series::demand_at;
use policysim::{
    classify, coerce_inputs, run, simulate, ImpactScores, MarketType, ParamValue, PolicyCategory,
    PolicyInput, PolicyType, RawParameters,
};

fn params(pairs: &[(&str, ParamValue)]) -> RawParameters {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

fn all_inputs(rate: f64) -> Vec<PolicyInput> {
    PolicyCategory::ALL
        .into_iter()
        .flat_map(|category| {
            MarketType::ALL
                .into_iter()
                .map(move |market| PolicyInput::new(category, market, rate))
        })
        .collect()
}

#[test]
fn repeated_runs_differ_only_in_id_and_timestamp() {
    let raw = params(&[
        ("subsidyType", ParamValue::from("producer")),
        ("market", ParamValue::from("agriculture")),
        ("rate", ParamValue::from(35.0)),
        ("Es", ParamValue::from(1.3)),
    ]);

    let first = run(PolicyType::Subsidy, &raw);
    let second = run(PolicyType::Subsidy, &raw);

    assert_ne!(first.id, second.id);
    assert_eq!(first.policy_category, PolicyCategory::SubsidyProducer);
    assert_eq!(first.inputs, second.inputs);
    assert_eq!(first.impacts, second.impacts);
    assert_eq!(first.outputs, second.outputs);
}

#[test]
fn time_series_reaches_full_delta_in_last_period() {
    for input in all_inputs(40.0) {
        let result = simulate(input.policy_category.family(), input);
        let out = &result.outputs;
        let ts = &out.time_series_data;

        assert_eq!(ts.len(), 12);
        assert_eq!(out.price_level.len(), 12);
        assert_eq!(ts[11].gdp, round2(100.0 + out.gdp_change));
        assert_eq!(ts[11].employment, round2(95.0 + out.employment_change));
        assert_eq!(ts[11].inflation, round2(2.0 + out.inflation_change));
        assert_eq!(ts[11].revenue, round2(50.0 + out.revenue_change));
        assert_eq!(ts[0].gdp, round2(100.0 + out.gdp_change * (1.0 / 12.0)));
    }
}

#[test]
fn doubling_rate_never_shrinks_nonzero_deltas() {
    for input in all_inputs(20.0) {
        let scores = ImpactScores::from_impacts(&classify(&input));
        let low = scores.scale(10.0);
        let high = scores.scale(20.0);

        let pairs = [
            (scores.gdp != 0, low.gdp_change, high.gdp_change),
            (scores.employment != 0, low.employment_change, high.employment_change),
            (scores.inflation != 0, low.inflation_change, high.inflation_change),
            (scores.revenue != 0, low.revenue_change, high.revenue_change),
            (scores.welfare != 0.0, low.welfare_change, high.welfare_change),
        ];
        for (nonzero, low, high) in pairs {
            if nonzero {
                assert!(
                    high.abs() >= low.abs(),
                    "{:?}: {low} -> {high}",
                    input.policy_category
                );
            }
        }
    }
}

#[test]
fn consumer_subsidy_demand_curve_is_shifted_up() {
    let raw = params(&[
        ("subsidyType", ParamValue::from("consumer")),
        ("Ed", ParamValue::from(0.6)),
    ]);
    let result = run(PolicyType::Subsidy, &raw);
    let at_50 = result
        .outputs
        .demand_curve
        .iter()
        .find(|p| p.x == 50.0)
        .expect("q = 50 on the grid");
    assert!((at_50.y - (demand_at(50.0, 0.6, 0.0) + 10.0)).abs() < 1e-9);
}

#[test]
fn unrecognized_category_matches_indirect_tax() {
    let bogus: PolicyInput = serde_json::from_value(serde_json::json!({
        "marketType": "electronics",
        "policyCategory": "tax_on_vibes",
        "policyRate": 12.0,
        "Ed": 1.5,
    }))
    .unwrap();
    let indirect = PolicyInput {
        policy_category: PolicyCategory::TaxIndirect,
        ..bogus.clone()
    };
    assert_eq!(classify(&bogus), classify(&indirect));
}

#[test]
fn unknown_market_and_subtype_fall_back() {
    let raw = params(&[
        ("tradeType", ParamValue::from("smuggling")),
        ("market", ParamValue::from("spaceships")),
    ]);
    let input = coerce_inputs(PolicyType::Trade, &raw);
    assert_eq!(input.policy_category, PolicyCategory::TradeExportSubsidy);
    assert_eq!(input.market_type, MarketType::Fuel);
    assert_eq!(input.policy_rate, 15.0);
}

#[test]
fn text_numbers_are_coerced() {
    let raw = params(&[
        ("controlType", ParamValue::from("minimum_wage")),
        ("rate", ParamValue::from("45")),
        ("laborDemandElasticity", ParamValue::from("1.2")),
        ("Ed", ParamValue::from("steep")),
    ]);
    let result = run(PolicyType::PriceControl, &raw);
    assert_eq!(result.inputs.policy_category, PolicyCategory::PriceMinimumWage);
    assert_eq!(result.inputs.policy_rate, 45.0);
    assert_eq!(result.inputs.labor_demand_elasticity, Some(1.2));
    assert_eq!(result.inputs.demand_elasticity, None);
}

#[test]
fn result_json_uses_wire_names() {
    let result = run(PolicyType::Tax, &RawParameters::new());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["policyType"], "tax");
    assert_eq!(json["policyCategory"], "tax_indirect");
    assert!(json["impacts"]["macro"]["items"].is_array());
    assert_eq!(json["outputs"]["timeSeriesData"].as_array().unwrap().len(), 12);
    assert_eq!(json["outputs"]["demandCurve"].as_array().unwrap().len(), 10);
    assert!(json["outputs"]["gdpChange"].is_number());
    assert!(json["inputs"].get("Ed").is_none());
}
