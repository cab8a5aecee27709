use blast_attendance_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_start_command_parsing() {
        let input = "/start";
        let result = Command::parse(input, "blasterbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Start));
    }

    #[test]
    fn test_help_command_parsing() {
        let input = "/help";
        let result = Command::parse(input, "blasterbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Help));
    }

    #[test]
    fn test_usefullinks_command_parsing() {
        let input = "/usefullinks";
        let result = Command::parse(input, "blasterbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::UsefulLinks));
    }

    #[test]
    fn test_attendance_command_captures_full_report() {
        let input = "/attendance 03/09/2025 absent marvell sick NA";
        let result = Command::parse(input, "blasterbot");

        assert!(result.is_ok());
        match result.unwrap() {
            Command::Attendance { details } => {
                assert_eq!(details, "03/09/2025 absent marvell sick NA");
            }
            _ => panic!("Expected Attendance command"),
        }
    }

    #[test]
    fn test_attendance_command_keeps_multi_word_reason() {
        let input = "/attendance 03/09/2025 late marvell night class ran long 19:15";
        let result = Command::parse(input, "blasterbot");

        assert!(result.is_ok());
        match result.unwrap() {
            Command::Attendance { details } => {
                assert_eq!(details, "03/09/2025 late marvell night class ran long 19:15");
            }
            _ => panic!("Expected Attendance command"),
        }
    }

    #[test]
    fn test_attendance_command_with_bot_username() {
        let input = "/attendance@blasterbot 03/09/2025 absent marvell sick NA";
        let result = Command::parse(input, "blasterbot");

        assert!(result.is_ok());
        match result.unwrap() {
            Command::Attendance { details } => {
                assert_eq!(details, "03/09/2025 absent marvell sick NA");
            }
            _ => panic!("Expected Attendance command"),
        }
    }

    #[test]
    fn test_command_with_different_bot_username() {
        let input = "/help@otherbot";
        let result = Command::parse(input, "blasterbot");
        // Should fail because it's not for our bot
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_command() {
        let input = "/unknown_command";
        let result = Command::parse(input, "blasterbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        let input = "i will be absent tomorrow";
        let result = Command::parse(input, "blasterbot");
        assert!(result.is_err());
    }

    // Real-world usage scenarios
    #[test]
    fn test_real_world_attendance_examples() {
        let test_cases = vec![
            (
                "/attendance 03/09/2025 absent marvell sick NA",
                "03/09/2025 absent marvell sick NA",
            ),
            (
                "/attendance 03/09/2025 late marvell night class 19:15",
                "03/09/2025 late marvell night class 19:15",
            ),
            (
                "/attendance 03/09/2025 leave early marvell family matter 20:30",
                "03/09/2025 leave early marvell family matter 20:30",
            ),
        ];

        for (input, expected_details) in test_cases {
            let result = Command::parse(input, "blasterbot");
            assert!(result.is_ok(), "Failed to parse: {}", input);

            match result.unwrap() {
                Command::Attendance { details } => {
                    assert_eq!(details, expected_details, "Details mismatch for input: {}", input);
                }
                _ => panic!("Expected Attendance command for input: {}", input),
            }
        }
    }

    #[test]
    fn test_commands_description() {
        // Test that command descriptions are available for the menu
        let descriptions = Command::descriptions().to_string();
        assert!(descriptions.contains("start"));
        assert!(descriptions.contains("attendance"));
        assert!(descriptions.contains("usefullinks"));
        assert!(descriptions.contains("help"));
        assert!(descriptions.contains("say hi to the bot"));
        assert!(descriptions.contains("contact the bossman"));
    }
}
