//! # Chatrs CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives full conversations through the binary's stdin and checks what
//! ends up on stdout.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_conversation_ends_on_farewell() {
    chatrs_cmd()
        .args(["chat", "--seed", "7"])
        .write_stdin("hello\nhow are you\nbye\nno\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("WELCOME TO CHATRS!")
                .and(predicate::str::contains("Thank you for chatting! Conversation ended."))
                .and(predicate::str::contains(
                    "You exchanged 3 messages in this conversation.",
                ))
                .and(predicate::str::contains("CONVERSATION HISTORY").not()),
        );
}

#[test]
fn test_runs_chat_without_subcommand() {
    chatrs_cmd()
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rusty: "));
}

#[test]
fn test_blank_line_gets_reminder() {
    chatrs_cmd()
        .write_stdin("   \nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rusty: Please say something!"));
}

#[test]
fn test_history_shown_on_yes() {
    chatrs_cmd()
        .args(["chat", "--name", "Ferris"])
        .write_stdin("What is your name?\nsee you later\nyes\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CONVERSATION HISTORY")
                .and(predicate::str::contains("You: What is your name?\nFerris: "))
                .and(predicate::str::contains("You: see you later\nFerris: ")),
        );
}

#[test]
fn test_end_of_input_is_graceful() {
    chatrs_cmd()
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for chatting!"));
}

#[test]
fn test_fallback_for_unknown_input() {
    let (_dir, path) = write_config("fallback = [\"Go on, {name}...\"]\n");

    chatrs_cmd()
        .args(["--config", &path, "chat", "--name", "Ferris"])
        .write_stdin("tell me a joke\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ferris: Go on, Ferris..."));
}

#[test]
fn test_custom_patterns_from_config() {
    let (_dir, path) = write_config(
        "bot_name = \"Barista\"\nfallback = [\"Hm?\"]\n\n[[patterns]]\nkey = \"coffee\"\nreplies = [\"Espresso coming up!\"]\n",
    );

    chatrs_cmd()
        .args(["--config", &path])
        .write_stdin("COFFEE please\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Barista: Espresso coming up!")
                .and(predicate::str::contains("Barista: Hm?")),
        );
}

#[test]
fn test_logs_stay_off_stdout() {
    chatrs_cmd()
        .args(["-vv", "chat"])
        .write_stdin("hello\nbye\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("matched pattern").not())
        .stderr(predicate::str::contains("matched pattern"));
}

#[test]
fn test_invalid_utf8_line_does_not_end_chat() {
    chatrs_cmd()
        .args(["chat", "--seed", "3"])
        .write_stdin(b"hello\ncaf\xe9\nbye\nno\n".to_vec())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Thank you for chatting! Conversation ended.")
                .and(predicate::str::contains(
                    "You exchanged 3 messages in this conversation.",
                )),
        )
        .stderr(predicate::str::contains("not valid UTF-8"));
}
