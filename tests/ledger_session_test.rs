use noc3::core::Medal;
use noc3::{AppError, GameConfig, LedgerSession, TerminalConsole};
use std::io::Cursor;

type ScriptedConsole = TerminalConsole<Cursor<String>, Vec<u8>>;

fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');
    TerminalConsole::new(Cursor::new(input), Vec::new())
}

fn output_of(session: LedgerSession<ScriptedConsole>) -> String {
    String::from_utf8(session.into_console().into_writer()).unwrap()
}

#[test]
fn test_full_game_with_retries() {
    let config = GameConfig {
        players: 3,
        rounds: 2,
        total_chips: 500,
    };
    let console = scripted(&[
        // roster
        "Ingvar Infå",
        "Greta",
        "Greta Åbo",
        "Sven Vasa",
        // interim report, then an invalid menu choice
        "2",
        "x",
        // round 1: bad integer, impossible result, then an unbalanced round
        "1",
        "abc",
        "-167",
        "50",
        "50",
        "-20",
        // round 1 again, balanced
        "50",
        "-30",
        "-20",
        // round 2
        "1",
        "83",
        "-37",
        "-46",
    ]);

    let mut session = LedgerSession::new(console, config);
    let standings = session.run().unwrap();

    let summary: Vec<(&str, i64, Option<Medal>)> = standings
        .iter()
        .map(|p| (p.name.as_str(), p.chips, p.medal))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Ingvar", 300, Some(Medal::Gold)),
            ("Greta", 100, Some(Medal::Silver)),
            ("Sven", 100, Some(Medal::Silver)),
        ]
    );

    let output = output_of(session);
    assert!(output.contains("Mellanrapport för runda 1:"));
    assert!(output.contains("Ingvar representerande Infå har 167 spelmärken."));
    assert!(output.contains("Sven representerande Vasa har 166 spelmärken."));
    assert!(output.contains("FEL: Du måste skriva antingen 1 eller 2."));
    assert!(output.contains("FEL: Du måste ange ett heltal."));
    assert!(output.contains("FEL: Resultatet du gav är inte möjligt!"));
    assert!(output.contains(
        "FEL: Spelarnas resultat stämmer inte ihop med det totala antalet spelmärken!"
    ));
    assert!(output.contains("Runda 1:"));
    assert!(output.contains("Runda 2:"));
    assert!(output.contains("Spelare Ingvar representerande Infå vann Guld med 300 spelmärken."));
    assert!(output.contains("Spelare Sven representerande Vasa vann Silver med 100 spelmärken."));

    // One bad name, one bad menu choice, three rejected round inputs.
    assert_eq!(output.matches("FEL: ").count(), 5);
}

#[test]
fn test_tie_for_gold_awards_bronze_next() {
    let config = GameConfig {
        players: 3,
        rounds: 1,
        total_chips: 800,
    };
    let console = scripted(&["Anna A", "Bo B", "Cilla C", "1", "33", "33", "-66"]);

    let mut session = LedgerSession::new(console, config);
    let standings = session.run().unwrap();

    let medals: Vec<Option<Medal>> = standings.iter().map(|p| p.medal).collect();
    assert_eq!(
        medals,
        vec![Some(Medal::Gold), Some(Medal::Gold), Some(Medal::Bronze)]
    );

    let output = output_of(session);
    assert!(output.contains("Spelare Anna representerande A vann Guld med 300 spelmärken."));
    assert!(output.contains("Spelare Bo representerande B vann Guld med 300 spelmärken."));
    assert!(output.contains("Spelare Cilla representerande C vann Brons med 200 spelmärken."));
    assert!(!output.contains("vann Silver"));
}

#[test]
fn test_two_player_game_awards_two_medals() {
    let config = GameConfig {
        players: 2,
        rounds: 1,
        total_chips: 10,
    };
    let console = scripted(&["Anna Andersson, Alby IK", "Bo B", "1", "-5", "5"]);

    let standings = LedgerSession::new(console, config).run().unwrap();

    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].name, "Bo");
    assert_eq!(standings[0].chips, 10);
    assert_eq!(standings[1].name, "Anna Andersson");
    assert_eq!(standings[1].club, "Alby IK");
    assert_eq!(standings[1].medal, Some(Medal::Silver));
}

#[test]
fn test_closed_input_ends_the_session() {
    let config = GameConfig {
        players: 2,
        rounds: 3,
        total_chips: 100,
    };
    let console = scripted(&["Anna A", "Bo B", "1", "10"]);

    let result = LedgerSession::new(console, config).run();
    assert!(matches!(result, Err(AppError::InputClosed)));
}
