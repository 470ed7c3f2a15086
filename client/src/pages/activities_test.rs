use super::*;
use crate::error::{LOAD_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
use crate::net::types::{Activity, Signup};
use crate::state::board::{LoadStatus, ParticipantEntry};
use crate::state::flash::FlashKind;

// =============================================================
// Helpers
// =============================================================

fn chess_snapshot() -> BoardSnapshot {
    BoardSnapshot {
        activities: vec![Activity {
            id: "1".to_owned(),
            name: "Chess".to_owned(),
            description: None,
        }],
        signups: vec![Signup {
            activity_id: "1".to_owned(),
            email: "a@x.com".to_owned(),
        }],
    }
}

fn loaded_board() -> BoardState {
    let mut board = BoardState::default();
    assert!(apply_load_result(&mut board, Ok(chess_snapshot())).is_none());
    board
}

fn request(email: &str, activity_id: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_owned(),
        activity_id: activity_id.to_owned(),
    }
}

fn card_emails(board: &BoardState) -> Vec<String> {
    board.card_models()[0]
        .participants
        .iter()
        .filter_map(|entry| match entry {
            ParticipantEntry::Email(email) => Some(email.clone()),
            ParticipantEntry::Placeholder => None,
        })
        .collect()
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_success_renders_chess_card_with_participant() {
    let board = loaded_board();
    assert_eq!(board.status, LoadStatus::Loaded);
    assert_eq!(board.card_models()[0].title, "Chess");
    assert_eq!(card_emails(&board), vec!["a@x.com"]);
}

#[test]
fn load_failure_replaces_cards_with_error() {
    let mut board = loaded_board();
    let err = apply_load_result(
        &mut board,
        Err(ApiError::Status {
            endpoint: "/api/signups",
            status: 500,
            detail: None,
        }),
    );
    assert!(matches!(err, Some(ClientError::Load(_))));
    assert_eq!(board.list_view(), ListView::Failed(LOAD_FAILED_MESSAGE));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn successful_signup_appends_email_and_uses_server_message() {
    let mut board = loaded_board();
    let message = apply_signup_result(
        &mut board,
        &request("b@x.com", "1"),
        Ok(Some("Signed up b@x.com for Chess".to_owned())),
    );
    assert_eq!(message, FlashMessage::success("Signed up b@x.com for Chess"));
    assert_eq!(card_emails(&board), vec!["a@x.com", "b@x.com"]);
}

#[test]
fn successful_signup_without_body_uses_default_message() {
    let mut board = loaded_board();
    let message = apply_signup_result(&mut board, &request("b@x.com", "1"), Ok(None));
    assert_eq!(message, FlashMessage::success(SIGNUP_SUCCESS_MESSAGE));
}

#[test]
fn same_email_twice_is_listed_once() {
    let mut board = loaded_board();
    apply_signup_result(&mut board, &request("b@x.com", "1"), Ok(None));
    apply_signup_result(&mut board, &request("b@x.com", "1"), Ok(None));
    assert_eq!(card_emails(&board), vec!["a@x.com", "b@x.com"]);
}

#[test]
fn failed_signup_leaves_index_untouched() {
    let mut board = loaded_board();
    let message = apply_signup_result(
        &mut board,
        &request("b@x.com", "1"),
        Err(ApiError::Transport("connection refused".to_owned())),
    );
    assert_eq!(message.kind, FlashKind::Error);
    assert_eq!(message.text, SIGNUP_FAILED_MESSAGE);
    assert_eq!(card_emails(&board), vec!["a@x.com"]);
}

#[test]
fn rejected_signup_shows_server_detail() {
    let mut board = loaded_board();
    let message = apply_signup_result(
        &mut board,
        &request("a@x.com", "1"),
        Err(ApiError::Status {
            endpoint: "/api/signups",
            status: 400,
            detail: Some("Student already signed up for this activity".to_owned()),
        }),
    );
    assert_eq!(message, FlashMessage::error("Student already signed up for this activity"));
}

// =============================================================
// Withdraw
// =============================================================

#[test]
fn successful_withdrawal_removes_email() {
    let mut board = loaded_board();
    let message = apply_withdraw_result(&mut board, &request("a@x.com", "1"), Ok(None));
    assert_eq!(message, FlashMessage::success(WITHDRAW_SUCCESS_MESSAGE));
    assert!(card_emails(&board).is_empty());
    assert_eq!(board.card_models()[0].participants, vec![ParticipantEntry::Placeholder]);
}

#[test]
fn failed_withdrawal_keeps_email() {
    let mut board = loaded_board();
    let message = apply_withdraw_result(
        &mut board,
        &request("a@x.com", "1"),
        Err(ApiError::Status {
            endpoint: "/api/signups",
            status: 404,
            detail: Some("Signup not found".to_owned()),
        }),
    );
    assert_eq!(message, FlashMessage::error("Signup not found"));
    assert_eq!(card_emails(&board), vec!["a@x.com"]);
}
