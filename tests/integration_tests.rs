// Integration tests for the mastermind game
// These tests verify that all modules work together correctly

use mastermind::cli::CliInterface;
use mastermind::*;
use std::io::Cursor;

fn play(secret: &str, input: &str) -> Result<GameReport, GameError> {
    let mut interface = CliInterface::new(Cursor::new(input.as_bytes().to_vec()));
    game_loop(secret_of(secret), &mut interface)
}

fn secret_of(code: &str) -> Secret {
    Secret::from(code.parse::<Guess>().unwrap())
}

#[test]
fn test_end_to_end_win_first_attempt() {
    let report = play("G-Y-B-K", "G-Y-B-K\n").unwrap();
    assert_eq!(report.outcome, GameOutcome::Won);
    assert_eq!(report.attempts, 1);

    let (guess, hint) = report.board.row(1).unwrap();
    assert_eq!(guess, report.secret.code());
    assert_eq!(hint, Hint::solved().markers());
}

#[test]
fn test_end_to_end_win_after_feedback() {
    let input = "Y-G-B-R\nG-G-Y-Y\nG-Y-B-K\n";
    let report = play("G-Y-B-K", input).unwrap();
    assert_eq!(report.outcome, GameOutcome::Won);
    assert_eq!(report.attempts, 3);

    let (_, first_hint) = report.board.row(1).unwrap();
    assert_eq!(
        first_hint,
        &[
            ColorCode::EXACT,
            ColorCode::COLOR_ONLY,
            ColorCode::COLOR_ONLY,
            ColorCode::EMPTY
        ]
    );
    // G-G-Y-Y vs G-Y-B-K: G exact, Y misplaced
    let (_, second_hint) = report.board.row(2).unwrap();
    assert_eq!(second_hint, Hint::from_counts(1, 1).markers());
}

#[test]
fn test_end_to_end_exhausted_reveals_secret() {
    let input = "R-R-R-R\n".repeat(MAX_ATTEMPTS);
    let report = play("G-Y-B-K", &input).unwrap();
    assert_eq!(report.outcome, GameOutcome::Exhausted);
    assert_eq!(report.attempts, MAX_ATTEMPTS);
    assert_eq!(report.secret.to_string(), "G-Y-B-K");
    assert!(report.board.is_full());
}

#[test]
fn test_game_stops_reading_after_last_attempt() {
    // a tenth line is never consumed
    let mut input = "R-R-R-R\n".repeat(MAX_ATTEMPTS);
    input.push_str("G-Y-B-K\n");
    let report = play("G-Y-B-K", &input).unwrap();
    assert_eq!(report.outcome, GameOutcome::Exhausted);
    assert_eq!(report.board.attempts_recorded(), MAX_ATTEMPTS);
}

#[test]
fn test_invalid_input_does_not_consume_attempts() {
    let mut input = String::new();
    for _ in 0..MAX_ATTEMPTS - 1 {
        input.push_str("R-R-R-R\n");
    }
    input.push_str("R-R-R\nR-R-R-Q\n\nG-Y-B-K\n");
    let report = play("G-Y-B-K", &input).unwrap();
    assert_eq!(report.outcome, GameOutcome::Won);
    assert_eq!(report.attempts, MAX_ATTEMPTS);
}

#[test]
fn test_non_utf8_line_is_rejected_and_reprompted() {
    let input: &[u8] = b"G-Y-B-\xE9\nG-Y-B-K\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let report = game_loop(secret_of("G-Y-B-K"), &mut interface).unwrap();
    assert_eq!(report.outcome, GameOutcome::Won);
    assert_eq!(report.attempts, 1);
}

#[test]
fn test_lowercase_and_whitespace_input() {
    let report = play("G-Y-B-K", "  g - y - b - k  \n").unwrap();
    assert_eq!(report.outcome, GameOutcome::Won);
}

#[test]
fn test_input_closed_mid_game_is_an_error() {
    let result = play("G-Y-B-K", "R-R-R-R\nO-O-O-O\n");
    assert!(matches!(result, Err(GameError::InputClosed)));
}

#[test]
fn test_empty_input_is_an_error() {
    let result = play("G-Y-B-K", "");
    assert!(matches!(result, Err(GameError::InputClosed)));
}

#[test]
fn test_seeded_game_is_reproducible() {
    let first = Secret::generate(&mut seeded_rng(Some(5)));
    let second = Secret::generate(&mut seeded_rng(Some(5)));
    assert_eq!(first, second);

    let input = format!("{first}\n");
    let mut interface = CliInterface::new(Cursor::new(input));
    let report = game_loop(second, &mut interface).unwrap();
    assert_eq!(report.outcome, GameOutcome::Won);
}

#[test]
fn test_scoring_scenarios() {
    let cases = [
        ("G-Y-B-K", "Y-G-B-R", 1, 2),
        ("G-G-Y-B", "G-Y-Y-Y", 2, 0),
        ("G-G-Y-B", "Y-G-K-Y", 1, 1),
        ("G-G-O-Y", "G-O-O-B", 2, 0),
        ("G-G-O-Y", "G-O-B-O", 1, 1),
        ("G-Y-K-K", "K-R-R-Y", 0, 2),
        ("V-V-V-V", "V-V-V-C", 3, 0),
        ("B-O-B-O", "O-B-O-B", 0, 4),
    ];
    for (secret, guess, exact, color_only) in cases {
        let secret = secret_of(secret);
        let guess: Guess = guess.parse().unwrap();
        let hint = score(&secret, &guess);
        assert_eq!(hint.exact_count(), exact, "{secret} vs {guess}");
        assert_eq!(hint.color_only_count(), color_only, "{secret} vs {guess}");
    }
}

#[test]
fn test_random_games_terminate() {
    let mut rng = seeded_rng(Some(77));
    for _ in 0..20 {
        let secret = Secret::generate(&mut rng);
        let mut input = String::new();
        for _ in 0..MAX_ATTEMPTS {
            input.push_str(&format!("{}\n", Secret::generate(&mut rng)));
        }
        let mut interface = CliInterface::new(Cursor::new(input));
        let report = game_loop(secret, &mut interface).unwrap();
        assert!(report.attempts >= 1 && report.attempts <= MAX_ATTEMPTS);
        match report.outcome {
            GameOutcome::Won => {
                let (guess, _) = report.board.row(report.attempts).unwrap();
                assert_eq!(guess, secret.code());
            }
            GameOutcome::Exhausted => assert_eq!(report.attempts, MAX_ATTEMPTS),
        }
    }
}
