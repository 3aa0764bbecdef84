mod quiz;

use std::sync::Arc;

use dotenv::dotenv;
use quiz::keywords::Stopwords;
use quiz::notes::NotesDocument;
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup},
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveFullName,
    ReceiveGameChoice,
    NotesQuizReceiveNotes,
    NotesQuizReceiveAmountOfQuestions {
        notes: String,
    },
    NotesQuiz {
        quiz: quiz::Quiz,
        question_number: usize,
        score: usize,
    },
}

type UserInfoStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() {
    dotenv().expect("Failed to load .env file");

    pretty_env_logger::init();
    log::info!("Starting notes quiz bot...");

    let bot = Bot::from_env();

    println!("Establishing connection to the database...");
    let storage: UserInfoStorage = SqliteStorage::open("db.sqlite", Json)
        .await
        .unwrap()
        .erase();
    println!("Connection established");

    // The stopword list is loaded once and shared with every quiz handler.
    let stopwords = Arc::new(Stopwords::english());

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceiveFullName].endpoint(receive_full_name))
            .branch(dptree::case![State::ReceiveGameChoice].endpoint(receive_game_choice))
            .branch(dptree::case![State::NotesQuizReceiveNotes].endpoint(receive_notes))
            .branch(
                dptree::case![State::NotesQuizReceiveAmountOfQuestions { notes }].endpoint(
                    move |bot: Bot, dialogue: QuizDialogue, notes: String, msg: Message| {
                        receive_amount_of_questions(stopwords.clone(), bot, dialogue, notes, msg)
                    },
                ),
            )
            .branch(
                dptree::case![State::NotesQuiz {
                    quiz,
                    question_number,
                    score
                }]
                .endpoint(notes_quiz),
            ),
    )
    .dependencies(dptree::deps![storage])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const GREETING_TEXT: &str = "Hi! I'm the notes quiz bot. Send me your study notes and I'll turn them into a multiple-choice quiz! Let's get acquainted first. What's your name?";
async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;

    dialogue.update(State::ReceiveFullName).await?;
    Ok(())
}

const NOTES_QUIZ_GAME: &str = "Start a quiz from my notes";
async fn receive_full_name(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(full_name) => {
            bot.send_message(msg.chat.id, format!("Nice to meet you, {}!", full_name))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, "Please send your name (as text)")
                .await?;
            return Ok(());
        }
    }

    let keyboard = KeyboardMarkup::new(vec![vec![KeyboardButton::new(NOTES_QUIZ_GAME)]]);
    bot.send_message(msg.chat.id, "What would you like to do?")
        .reply_markup(keyboard)
        .await?;

    dialogue.update(State::ReceiveGameChoice).await?;
    return Ok(());
}

async fn receive_game_choice(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    match msg.text() {
        Some(NOTES_QUIZ_GAME) => {
            bot.send_message(
                msg.chat.id,
                "Send me the notes you'd like to be quizzed on (plain text)",
            )
            .await?;
            dialogue.update(State::NotesQuizReceiveNotes).await?;
            return Ok(());
        }
        _ => {
            bot.send_message(msg.chat.id, "Please pick one of the options")
                .await?;
            return Ok(());
        }
    }
}

async fn receive_notes(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    let Some(notes) = msg.text() else {
        bot.send_message(msg.chat.id, "Please send your notes as plain text")
            .await?;
        return Ok(());
    };

    let keyboard = KeyboardMarkup::new(vec![
        vec![KeyboardButton::new("5")],
        vec![KeyboardButton::new("10")],
        vec![KeyboardButton::new("15")],
    ]);
    bot.send_message(msg.chat.id, "How many questions would you like?")
        .reply_markup(keyboard)
        .await?;

    dialogue
        .update(State::NotesQuizReceiveAmountOfQuestions {
            notes: notes.to_string(),
        })
        .await?;
    Ok(())
}

async fn receive_amount_of_questions(
    stopwords: Arc<Stopwords>,
    bot: Bot,
    dialogue: QuizDialogue,
    notes: String,
    msg: Message,
) -> HandlerResult {
    if let None = msg.text() {
        bot.send_message(msg.chat.id, "Please send a number").await?;
        return Ok(());
    }
    if let Err(_) = msg.text().unwrap().parse::<usize>() {
        bot.send_message(msg.chat.id, "Please send a number").await?;
        return Ok(());
    }

    // It is safe to unwrap here because we've already checked that the input is a number
    let amount: usize = msg.text().unwrap().parse().unwrap();
    if amount == 0 {
        bot.send_message(msg.chat.id, "The amount of questions can't be 0")
            .await?;
        return Ok(());
    }

    let document = NotesDocument::new(&notes, &stopwords);
    let questions = document.generate(amount, &mut rand::thread_rng());

    if questions.is_empty() {
        bot.send_message(
            msg.chat.id,
            "I couldn't find enough quizzable material in those notes. Try sending a longer passage",
        )
        .await?;
        dialogue.update(State::NotesQuizReceiveNotes).await?;
        return Ok(());
    }

    let quiz = quiz::Quiz::new(questions);

    bot.send_message(msg.chat.id, "Great! Let's start the quiz!")
        .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new("Go!")]]))
        .await?;

    dialogue
        .update(State::NotesQuiz {
            quiz,
            question_number: 0,
            score: 0,
        })
        .await?;
    Ok(())
}

async fn notes_quiz(
    bot: Bot,
    dialogue: QuizDialogue,
    (quiz, question_number, score): (quiz::Quiz, usize, usize),
    msg: Message,
) -> HandlerResult {
    let mut current_score = score;
    if question_number != 0 {
        let answer = msg.text().unwrap_or_default();
        let question = &quiz.questions[question_number - 1];
        let correct_answer = question.answers.iter().find(|a| a.is_correct).unwrap();
        if answer == correct_answer.text {
            bot.send_message(msg.chat.id, "Correct!").await?;
            current_score += 1;
        } else {
            bot.send_message(
                msg.chat.id,
                format!("Wrong!\n\n{}", question.explanation),
            )
            .await?;
        }
    }

    if question_number >= quiz.questions.len() {
        let keyboard = KeyboardMarkup::new(vec![vec![KeyboardButton::new(NOTES_QUIZ_GAME)]]);
        let quiz_score = format!(
            "The quiz is over! You answered {} out of {} questions correctly\nWhat would you like to do next?",
            current_score,
            quiz.questions.len()
        );
        bot.send_message(msg.chat.id, quiz_score.as_str())
            .reply_markup(keyboard)
            .await?;

        dialogue.update(State::ReceiveGameChoice).await?;
        return Ok(());
    }

    let question = &quiz.questions[question_number];

    let question_text = format!(
        "Question #{}: \n{}",
        question_number + 1,
        question.prompt
    );

    bot.send_message(msg.chat.id, question_text)
        .reply_markup(KeyboardMarkup::new(
            question
                .answers
                .iter()
                .map(|a| vec![KeyboardButton::new(a.text.clone())])
                .collect::<Vec<_>>(),
        ))
        .await?;

    dialogue
        .update(State::NotesQuiz {
            quiz,
            question_number: question_number + 1,
            score: current_score,
        })
        .await?;
    Ok(())
}
