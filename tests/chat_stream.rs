use policysim::chat::{quick_questions, upstream_body, Conversation, DeltaDecoder, SYSTEM_PROMPT};
use policysim::{run, ParamValue, PolicyType, RawParameters, RelayError};

fn sse(content: &str) -> String {
    format!(
        "data: {}\n\n",
        serde_json::json!({"id": "c1", "choices": [{"index": 0, "delta": {"content": content}}]})
    )
}

fn decode_in_chunks(stream: &str, chunk_len: usize) -> (String, bool) {
    let mut decoder = DeltaDecoder::new();
    let mut text = String::new();
    for chunk in stream.as_bytes().chunks(chunk_len) {
        for delta in decoder.push_bytes(chunk) {
            text.push_str(&delta);
        }
    }
    for delta in decoder.finish() {
        text.push_str(&delta);
    }
    (text, decoder.is_done())
}

#[test]
fn reassembles_reply_regardless_of_chunking() {
    let stream = format!(
        ": OPENROUTER PROCESSING\n\n{}{}{}data: [DONE]\n\n",
        sse("Tariffs raise "),
        sse("import prices — "),
        sse("consumers pay more.")
    );
    for chunk_len in [1, 3, 7, 64, stream.len()] {
        let (text, done) = decode_in_chunks(&stream, chunk_len);
        assert_eq!(text, "Tariffs raise import prices — consumers pay more.");
        assert!(done, "chunk length {chunk_len}");
    }
}

#[test]
fn crlf_framed_stream() {
    let stream = format!("{}{}data: [DONE]\r\n", sse("a"), sse("b")).replace('\n', "\r\n");
    let (text, done) = decode_in_chunks(&stream, 5);
    assert_eq!(text, "ab");
    assert!(done);
}

#[test]
fn stream_without_done_still_yields_text() {
    let (text, done) = decode_in_chunks(&sse("partial"), 4);
    assert_eq!(text, "partial");
    assert!(!done);
}

#[test]
fn conversation_round_trip_through_decoder() {
    let mut raw = RawParameters::new();
    raw.insert("tradeType".into(), ParamValue::from("export_restriction"));
    let result = run(PolicyType::Trade, &raw);

    let mut convo = Conversation::new();
    convo.set_simulation(&result).unwrap();
    assert!(convo.push_user(quick_questions(&result)[0].prompt));

    let mut decoder = DeltaDecoder::new();
    for delta in decoder.push(&format!("{}{}", sse("Domestic "), sse("prices fall."))) {
        convo.append_assistant_delta(&delta);
    }
    assert_eq!(convo.turns().last().unwrap().content, "Domestic prices fall.");

    let body = upstream_body(&convo.to_request(), "test-model");
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["model"], "test-model");
    assert_eq!(json["stream"], true);
    assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
    assert_eq!(json["messages"][1]["role"], "system");
    assert_eq!(json["messages"][2]["role"], "user");
    assert_eq!(json["messages"][3]["role"], "assistant");
}

#[test]
fn relay_status_mapping() {
    assert_eq!(RelayError::from_status(429), RelayError::RateLimited);
    assert_eq!(RelayError::from_status(402), RelayError::CreditsExhausted);
    assert_eq!(
        RelayError::from_status(503),
        RelayError::Upstream { status: 503 }
    );
}
