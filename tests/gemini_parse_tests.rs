use quizgen::{
    gemini::{extract_json_object, parse_json_reply, strip_code_fences},
    grade::GradingResult,
    quiz::{Question, Quiz},
};

#[test]
fn code_fences_are_stripped() {
    let reply = "```json\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fences(reply).trim(), "{\"a\": 1}");
}

#[test]
fn json_object_is_extracted_from_surrounding_prose() {
    let reply = "Here is your quiz:\n{\"questions\": []}\nEnjoy!";
    assert_eq!(extract_json_object(reply), Some("{\"questions\": []}"));
}

#[test]
fn reply_without_json_yields_none() {
    assert_eq!(extract_json_object("no json here"), None);
}

#[test]
fn fenced_verdict_parses_into_a_grading_result() {
    let reply = "```json\n{\"isCorrect\": true, \"score\": 85, \"feedback\": \"Close enough\"}\n```";
    let result: GradingResult = parse_json_reply(reply).expect("parse");
    assert!(result.is_correct);
    assert_eq!(result.score, 85);
    assert_eq!(result.feedback, "Close enough");
}

#[test]
fn vocabulary_reply_parses_into_choice_questions() {
    let reply = r#"{
        "questions": [
            {
                "word": "mitochondria",
                "options": ["powerhouse", "membrane", "nucleus", "ribosome"],
                "correct": 0,
                "explanation": "The organelle that produces energy."
            }
        ]
    }"#;
    let quiz: Quiz = parse_json_reply(reply).expect("parse");
    assert_eq!(quiz.questions.len(), 1);
    match &quiz.questions[0] {
        Question::Choice { word, options, correct, .. } => {
            assert_eq!(word, "mitochondria");
            assert_eq!(options.len(), 4);
            assert_eq!(*correct, 0);
        }
        other => panic!("expected a choice question, got {other:?}"),
    }
    assert_eq!(quiz.questions[0].correct_answer(), Some("powerhouse"));
}

#[test]
fn word_order_reply_parses_and_exposes_its_answer() {
    let reply = r#"{
        "questions": [
            {
                "original": "The cat sat down",
                "shuffled": ["down", "The", "sat", "cat"],
                "answer": "The cat sat down"
            }
        ]
    }"#;
    let quiz: Quiz = parse_json_reply(reply).expect("parse");
    assert_eq!(quiz.questions[0].correct_answer(), Some("The cat sat down"));
}

#[test]
fn translation_reply_parses_and_exposes_its_answer() {
    let reply = r#"{
        "questions": [
            {
                "question": "I eat bread every morning",
                "answer": "毎朝パンを食べます",
                "explanation": "Habitual present"
            }
        ]
    }"#;
    let quiz: Quiz = parse_json_reply(reply).expect("parse");
    assert_eq!(quiz.questions[0].correct_answer(), Some("毎朝パンを食べます"));
}

#[test]
fn out_of_range_correct_index_has_no_answer() {
    let question = Question::Choice {
        word:        "stray".to_string(),
        options:     vec!["a".to_string(), "b".to_string()],
        correct:     7,
        explanation: None,
    };
    assert_eq!(question.correct_answer(), None);
}
