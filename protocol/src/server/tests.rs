#[cfg(test)]
mod tests {
    use crate::{MAX_LINE_LENGTH, ParseError, ServerMessage, parse_server_message};

    #[test]
    fn test_parse_player_number() {
        let message = parse_server_message("2").unwrap();

        assert_eq!(message, ServerMessage::PlayerNumber(2));
    }

    #[test]
    fn test_parse_status() {
        let message = parse_server_message(r#"{"result":"It's your turn!"}"#).unwrap();

        assert_eq!(message, ServerMessage::status("It's your turn!"));
        assert_eq!(message.text(), Some("It's your turn!"));
    }

    #[test]
    fn test_parse_outcome() {
        let line = r#"{"result":"You dealt 45 damage to Pikachu. Remaining HP: 55","damage":45,"remainingHP":55}"#;
        let message = parse_server_message(line).unwrap();

        assert_eq!(
            message,
            ServerMessage::outcome("You dealt 45 damage to Pikachu. Remaining HP: 55", 45, 55)
        );
    }

    #[test]
    fn test_outcome_field_names() {
        let wire = ServerMessage::outcome("hit", 3, 7).to_wire_format();

        assert_eq!(wire, r#"{"result":"hit","damage":3,"remainingHP":7}"#);
    }

    #[test]
    fn test_player_number_is_bare() {
        assert_eq!(ServerMessage::PlayerNumber(1).to_wire_format(), "1");
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_server_message("{\"unknown\":true}");

        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_too_long() {
        let line = "x".repeat(MAX_LINE_LENGTH + 1);
        let result = parse_server_message(&line);

        assert!(matches!(result, Err(ParseError::TooLong { .. })));
    }

    #[test]
    fn test_game_over_line() {
        use crate::server::status::{GAME_OVER_PREFIX, game_over};

        let line = game_over(2);

        assert_eq!(line, "Game Over. Player 2 wins.");
        assert!(line.starts_with(GAME_OVER_PREFIX));
    }
}
