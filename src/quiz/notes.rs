//! Fill-in-the-blank question generation from free-text notes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::keywords::{KeywordSet, Stopwords};
use crate::quiz::{tokenize, Answer, Question};

/// Placeholder substituted for the answer word in a prompt.
pub const BLANK: &str = "_____";

/// Distractors sampled per question; with the answer appended the option
/// count is at most four.
const DISTRACTORS_PER_QUESTION: usize = 3;

/// A single upload of notes, tokenized once and ready to be turned into
/// questions any number of times.
pub struct NotesDocument {
    sentences: Vec<String>,
    keywords: KeywordSet,
}

impl NotesDocument {
    pub fn new(text: &str, stopwords: &Stopwords) -> Self {
        Self {
            sentences: tokenize::sentences(text),
            keywords: KeywordSet::extract(text, stopwords),
        }
    }

    /// Generate at most `num_questions` fill-in-the-blank questions.
    ///
    /// Only the first `num_questions` sentences are considered; a sentence
    /// without a qualifying word contributes nothing and no later sentence is
    /// scanned in its place, so the result may be shorter than asked for —
    /// or empty. Insufficient material is never an error.
    pub fn generate<R: Rng>(&self, num_questions: usize, rng: &mut R) -> Vec<Question> {
        let mut questions = Vec::new();
        if self.keywords.is_empty() {
            return questions;
        }

        for sentence in self.sentences.iter().take(num_questions) {
            let answer = tokenize::words(sentence).into_iter().find(|word| {
                word.chars().count() > 3 && self.keywords.contains(&word.to_lowercase())
            });
            // First qualifying word wins; sentences made of short or common
            // words are skipped.
            let Some(answer) = answer else {
                continue;
            };

            // Only the first occurrence gets blanked.
            let prompt = sentence.replacen(answer.as_str(), BLANK, 1);

            let answer_lowercase = answer.to_lowercase();
            let mut options: Vec<Answer> = self
                .keywords
                .sample_distractors(&answer_lowercase, DISTRACTORS_PER_QUESTION, rng)
                .into_iter()
                .map(|distractor| Answer::new(distractor, false))
                .collect();
            options.push(Answer::new(answer.clone(), true));
            options.shuffle(rng);

            let explanation = format!(
                "The correct answer is '{}'. This is because the statement from the notes says: \"{}\"",
                answer, sentence
            );

            questions.push(Question::new(prompt, options, explanation));
        }

        log::debug!(
            "generated {} questions from {} sentences ({} keywords)",
            questions.len(),
            self.sentences.len(),
            self.keywords.len()
        );

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(text: &str, num_questions: usize, seed: u64) -> Vec<Question> {
        let stopwords = Stopwords::english();
        let document = NotesDocument::new(text, &stopwords);
        let mut rng = StdRng::seed_from_u64(seed);
        document.generate(num_questions, &mut rng)
    }

    fn correct(question: &Question) -> &Answer {
        question
            .answers
            .iter()
            .find(|a| a.is_correct)
            .expect("every question has a correct answer")
    }

    #[test]
    fn never_produces_more_questions_than_asked() {
        let text = "Mitochondria produce energy. Ribosomes build proteins. \
                    Chloroplasts capture sunlight. Vacuoles store water.";
        let questions = generate(text, 2, 1);
        assert!(questions.len() <= 2);
    }

    #[test]
    fn short_word_sentences_are_skipped_without_lookahead() {
        // Sentence one has no word longer than 3 characters, so with
        // num_questions = 1 nothing is generated even though sentence two
        // would qualify.
        let text = "The cat sat. Photosynthesis powers most plants.";
        assert!(generate(text, 1, 1).is_empty());
    }

    #[test]
    fn two_sentence_scenario_yields_one_question() {
        let text = "The cat sat on the mat. Dogs bark loudly at night.";
        let questions = generate(text, 2, 42);

        // "cat", "sat" and "mat" are too short, so only the second sentence
        // produces a question, answered by its first word longer than 3
        // characters.
        assert_eq!(questions.len(), 1);
        let question = &questions[0];
        assert_eq!(correct(question).text, "Dogs");
        assert_eq!(question.prompt, "_____ bark loudly at night.");
        assert!(question.explanation.contains("'Dogs'"));
        assert!(question
            .explanation
            .contains("\"Dogs bark loudly at night.\""));
        // Seven keywords total, so a full set of three distractors exists.
        assert_eq!(question.answers.len(), 4);
    }

    #[test]
    fn empty_input_yields_empty_quiz() {
        assert!(generate("", 5, 1).is_empty());
    }

    #[test]
    fn all_stopword_input_yields_empty_quiz() {
        assert!(generate("The the the cat.", 5, 1).is_empty());
    }

    #[test]
    fn tiny_vocabulary_degrades_to_fewer_options() {
        let questions = generate("Mitochondria. Mitochondria!", 2, 3);
        assert_eq!(questions.len(), 2);
        for question in &questions {
            // One keyword in total, so no distractors are available.
            assert_eq!(question.answers.len(), 1);
            assert_eq!(correct(question).text, "Mitochondria");
        }
    }

    #[test]
    fn options_are_distinct_and_contain_answer_once() {
        let text = "Mitochondria produce energy inside animal cells. \
                    Ribosomes assemble proteins from amino acids. \
                    Chloroplasts capture sunlight during photosynthesis.";
        for seed in 0..20 {
            for question in generate(text, 3, seed) {
                let lowered: Vec<String> = question
                    .answers
                    .iter()
                    .map(|a| a.text.to_lowercase())
                    .collect();

                let mut distinct = lowered.clone();
                distinct.sort();
                distinct.dedup();
                assert_eq!(distinct.len(), lowered.len(), "duplicate options");

                let answer = correct(&question);
                assert!(lowered.contains(&answer.text.to_lowercase()));
                assert_eq!(
                    question.answers.iter().filter(|a| a.is_correct).count(),
                    1
                );
                assert_eq!(question.answers.len(), 4);
            }
        }
    }

    #[test]
    fn prompt_blanks_exactly_one_occurrence() {
        // "Energy" appears twice in the sentence; only the first occurrence
        // is blanked.
        let text = "Energy flows where energy is needed.";
        let questions = generate(text, 1, 9);
        assert_eq!(questions.len(), 1);
        let prompt = &questions[0].prompt;
        assert_eq!(prompt.matches(BLANK).count(), 1);
        assert_eq!(prompt, "_____ flows where energy is needed.");
    }
}
