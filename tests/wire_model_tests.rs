use quizgen::grade::{GradingResult, QuestionType};

#[test]
fn grading_result_serializes_in_camel_case() {
    let result = GradingResult::builder()
        .is_correct(true)
        .score(92)
        .feedback("Almost perfect! The expected answer was \"I like apples\".")
        .build();

    let value = serde_json::to_value(&result).expect("serialize");
    assert_eq!(value["isCorrect"], true);
    assert_eq!(value["score"], 92);
    assert!(value["feedback"].as_str().unwrap().contains("I like apples"));
}

#[test]
fn grading_result_round_trips() {
    let json = r#"{"isCorrect": false, "score": 30, "feedback": "Not quite."}"#;
    let result: GradingResult = serde_json::from_str(json).expect("deserialize");
    assert!(!result.is_correct);
    assert_eq!(result.score, 30);
}

#[test]
fn question_types_parse_from_their_wire_names() {
    assert_eq!("vocabulary".parse::<QuestionType>().unwrap(), QuestionType::Vocabulary);
    assert_eq!("word-order".parse::<QuestionType>().unwrap(), QuestionType::WordOrder);
    assert_eq!("translation".parse::<QuestionType>().unwrap(), QuestionType::Translation);
    assert_eq!("reading".parse::<QuestionType>().unwrap(), QuestionType::Reading);
    assert!("essay".parse::<QuestionType>().is_err());
}

#[test]
fn question_type_serde_uses_kebab_case() {
    let value = serde_json::to_value(QuestionType::WordOrder).expect("serialize");
    assert_eq!(value, "word-order");

    let parsed: QuestionType = serde_json::from_value(value).expect("deserialize");
    assert_eq!(parsed, QuestionType::WordOrder);
}

#[test]
fn question_type_display_matches_wire_name() {
    assert_eq!(QuestionType::Reading.to_string(), "reading");
    assert_eq!(QuestionType::WordOrder.as_str(), "word-order");
}
