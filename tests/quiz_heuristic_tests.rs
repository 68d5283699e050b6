use quizgen::{
    grade::QuestionType,
    quiz::{Question, heuristic},
};

const TEXT: &str = "Photosynthesis converts sunlight into chemical energy. Plants absorb \
                    carbon dioxide through their leaves. Chlorophyll molecules capture photons \
                    inside chloroplasts. Oxygen escapes as a byproduct during daylight.";

#[test]
fn word_order_questions_shuffle_whole_sentences() {
    let quiz = heuristic::generate_quiz(TEXT, QuestionType::WordOrder).expect("generate");
    assert!(!quiz.questions.is_empty() && quiz.questions.len() <= 3);

    for question in &quiz.questions {
        let Question::WordOrder { original, shuffled, answer, .. } = question else {
            panic!("expected a word-order question");
        };
        assert_eq!(original, answer);

        let mut original_words: Vec<&str> = original.split_whitespace().collect();
        let mut shuffled_words: Vec<&str> = shuffled.iter().map(String::as_str).collect();
        assert_ne!(original_words, shuffled_words, "shuffle leaked the answer");

        original_words.sort_unstable();
        shuffled_words.sort_unstable();
        assert_eq!(original_words, shuffled_words, "shuffle changed the words");
    }
}

#[test]
fn vocabulary_questions_blank_out_their_target() {
    let quiz = heuristic::generate_quiz(TEXT, QuestionType::Vocabulary).expect("generate");
    assert!(!quiz.questions.is_empty() && quiz.questions.len() <= 5);

    for question in &quiz.questions {
        let Question::Choice { word, options, correct, explanation } = question else {
            panic!("expected a choice question");
        };
        assert!(word.contains("____"), "cloze blank missing from {word:?}");
        assert_eq!(options.len(), 4);

        let target = &options[*correct];
        let sentence = explanation.as_deref().expect("explanation keeps the sentence");
        assert!(sentence.contains(target.as_str()), "{target:?} not in {sentence:?}");
    }
}

#[test]
fn cloze_blank_spares_compound_words() {
    let text = "The flash-lighting crew keeps lighting the stage tonight.";
    let quiz = heuristic::generate_quiz(text, QuestionType::Vocabulary).expect("generate");

    let Question::Choice { word, options, correct, .. } = &quiz.questions[0] else {
        panic!("expected a choice question");
    };
    assert_eq!(options[*correct], "lighting");
    assert!(word.contains("flash-lighting"), "compound word mangled: {word:?}");
    assert!(word.contains("____"), "cloze blank missing from {word:?}");
    assert!(
        !word.split_whitespace().any(|w| w == "lighting"),
        "target still present in {word:?}"
    );
}

#[test]
fn every_question_has_a_correct_answer() {
    for quiz_type in [QuestionType::Vocabulary, QuestionType::WordOrder] {
        let quiz = heuristic::generate_quiz(TEXT, quiz_type).expect("generate");
        for question in &quiz.questions {
            assert!(question.correct_answer().is_some());
        }
    }
}

#[test]
fn translation_and_reading_require_a_model() {
    assert!(heuristic::generate_quiz(TEXT, QuestionType::Translation).is_err());
    assert!(heuristic::generate_quiz(TEXT, QuestionType::Reading).is_err());
}

#[test]
fn empty_text_is_rejected() {
    assert!(heuristic::generate_quiz("", QuestionType::WordOrder).is_err());
}

#[test]
fn short_fragments_produce_no_word_order_questions() {
    assert!(heuristic::generate_quiz("One. Two. Three.", QuestionType::WordOrder).is_err());
}
