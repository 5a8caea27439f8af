use clap::Parser;
use notekeeper::cli::args::{Args, Command};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notekeeper", "42"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_add_command_when_parsing_then_reads_title_and_content() {
    // Arrange
    let args = vec!["notekeeper", "add", "--title", "Groceries", "-b", "milk eggs"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add { title, content } => {
            assert_eq!(title, "Groceries");
            assert_eq!(content, "milk eggs");
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_add_without_content_when_parsing_then_content_is_empty() {
    let parsed = Args::try_parse_from(["notekeeper", "add", "-t", "Only title"]).unwrap();

    match parsed.command {
        Command::Add { content, .. } => assert_eq!(content, ""),
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_add_without_title_when_parsing_then_fails() {
    let result = Args::try_parse_from(["notekeeper", "add", "-b", "body"]);

    assert!(result.is_err());
}

#[test]
fn given_view_command_with_json_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notekeeper", "view", "--json", "17"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View { note_id, json } => {
            assert_eq!(note_id, 17);
            assert!(json);
        }
        _ => panic!("Expected View command"),
    }
    assert_eq!(parsed.database, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_edit_command_with_title_only_when_parsing_then_content_is_none() {
    let parsed = Args::try_parse_from(["notekeeper", "edit", "3", "-t", "Renamed"]).unwrap();

    match parsed.command {
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            assert_eq!(note_id, 3);
            assert_eq!(title, Some("Renamed".to_string()));
            assert_eq!(content, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_global_database_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["notekeeper", "delete", "-d", "/tmp/notes.db", "9"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id } => assert_eq!(note_id, 9),
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(
        parsed.database,
        Some(std::path::PathBuf::from("/tmp/notes.db"))
    );
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    let parsed = Args::try_parse_from(["notekeeper", "-vv", "list"]).unwrap();

    assert_eq!(parsed.verbose, 2);
    match parsed.command {
        Command::List { json } => assert!(!json),
        _ => panic!("Expected List command"),
    }
}
