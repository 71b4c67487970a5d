//! Reports built from known values
//!
//! Small but complete reports are generated with the same layout MCNP uses,
//! so every extracted value can be checked against what went in.

use mcpost_outp::{CellRecord, Error, Outp, OutpReader, TallyResult};
use rstest::{fixture, rstest};

/// Everything needed to write a minimal report
struct Deck {
    records: Vec<CellRecord>,
    tally: u32,
    card: Vec<String>,
    results: Vec<(String, TallyResult)>,
    nps: u64,
}

impl Deck {
    fn report(&self) -> String {
        let mut lines = Vec::new();
        let mut n = 0;
        let mut echo = |lines: &mut Vec<String>, card: &str| {
            n += 1;
            lines.push(format!("{n:>5}-       {card}"));
        };

        // input echo
        lines.push(" inp=test.i".to_string());
        lines.push(String::new());
        echo(&mut lines, "Generated deck");
        for r in &self.records {
            echo(&mut lines, &format!("{} {} -1.0 -1 imp:n=1", r.id, r.material));
        }
        echo(&mut lines, "");
        echo(&mut lines, "1 so 10.0");
        echo(&mut lines, "");
        echo(&mut lines, "m1 1001.80c 1.0");
        for card in &self.card {
            echo(&mut lines, card);
        }
        echo(&mut lines, &format!("nps {}", self.nps));
        echo(&mut lines, "");
        lines.push(String::new());

        // cell summary table
        lines.push(format!("1cells{:>60}", "print table 60"));
        lines.push(String::new());
        lines.push(format!("{:>35}{:>12}", "atom", "gram"));
        lines.push("              cell      mat   density     density     volume       mass            pieces importance".to_string());
        lines.push(String::new());
        for (i, r) in self.records.iter().enumerate() {
            lines.push(format!(
                "{:>9}{:>9}{:>9} {:e} {:e} {:e} {:e} {:>11} {:e}",
                i + 1,
                r.id,
                r.material,
                r.atom_density,
                r.mass_density,
                r.volume,
                r.mass,
                r.pieces,
                r.importance
            ));
        }
        lines.push(String::new());
        lines.push(" total".to_string());
        lines.push(String::new());

        // tally results
        lines.push(format!("1tally {:>8}        nps = {:>11}", self.tally, self.nps));
        lines.push("           tally type 4    track length estimate of particle flux.".to_string());
        lines.push("           particle(s): neutrons".to_string());
        lines.push(String::new());
        lines.push("           volumes".to_string());
        lines.push(" ".to_string());
        lines.extend(self.result_rows());
        lines.push(String::new());
        lines.push(format!(
            "           results of 10 statistical checks for the estimated answer for tally {:>8}",
            self.tally
        ));

        // termination
        lines.push(String::new());
        lines.push(format!(
            " run terminated when {:>11}  particle histories were done.",
            self.nps
        ));
        lines.push(String::new());
        lines.push(" mcnp     version 6     probid =  10/17/26 12:00:00".to_string());

        lines.join("\n")
    }

    fn result_rows(&self) -> Vec<String> {
        let mut rows = Vec::new();
        for (label, result) in &self.results {
            rows.push(format!(" cell  {label}"));
            rows.push(format!("{:>17e} {}", result.value, result.error));
            rows.push(" ".to_string());
        }
        rows
    }

    fn outp(&self) -> Outp {
        let mut reader = OutpReader::new();
        reader.set_strip_header(false);
        reader.read_str(&self.report())
    }
}

fn record(id: u32, material: u32, scale: f64) -> CellRecord {
    CellRecord {
        id,
        material,
        atom_density: 0.0847552 * scale,
        mass_density: 7.86 * scale,
        volume: 4188.79 * scale,
        mass: 32923.9 * scale,
        pieces: 1.0,
        importance: 1.0,
    }
}

fn result(value: f64, error: f64) -> TallyResult {
    TallyResult { value, error }
}

fn cards(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[fixture]
fn deck() -> Deck {
    Deck {
        records: vec![record(1, 1, 1.0), record(2, 1, 0.5), record(30, 0, 0.25)],
        tally: 4,
        card: cards(&["f4:n 1 2", "        30"]),
        results: vec![
            ("1".to_string(), result(1.5e-3, 0.02)),
            ("2".to_string(), result(2.25e-4, 0.1)),
            ("30".to_string(), result(0.0, 0.0)),
        ],
        nps: 2_000_000,
    }
}

// ! Everything that goes in comes back out

#[rstest]
fn cell_records_recovered(deck: Deck) {
    let outp = deck.outp();
    assert_eq!(outp.cell_table().len(), deck.records.len());

    for r in &deck.records {
        assert_eq!(outp.cell(r.id), Some(r));
        assert_eq!(outp.volumes(r.id).unwrap()[&r.id], r.volume);
        assert_eq!(outp.mass(r.id).unwrap()[&r.id], r.mass);
        assert_eq!(outp.atom_density(r.id).unwrap()[&r.id], r.atom_density);
        assert_eq!(outp.mass_density(r.id).unwrap()[&r.id], r.mass_density);
        assert_eq!(outp.material(r.id).unwrap()[&r.id], r.material);
    }
}

#[rstest]
fn tally_recovered(deck: Deck) {
    let outp = deck.outp();

    assert_eq!(outp.tally_cells(4, "n").unwrap(), vec![1, 2, 30]);

    let results = outp.tally_values(4, None).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[&1], result(1.5e-3, 0.02));
    assert_eq!(results[&2], result(2.25e-4, 0.1));
    assert_eq!(results[&30], result(0.0, 0.0));

    assert_eq!(outp.nps().unwrap(), 2_000_000);
    assert!(outp.status().is_clean());
}

#[rstest]
fn repeated_queries(deck: Deck) {
    let outp = deck.outp();
    let first = (outp.tally_cells(4, "n").unwrap(), outp.tally_values(4, None).unwrap());
    let second = (outp.tally_cells(4, "n").unwrap(), outp.tally_values(4, None).unwrap());
    assert_eq!(first, second);
}

// ! Tally card variants

#[rstest]
#[case("f4:n 1 2 30")]
#[case("F4:n 1 2 30")]
#[case("*f4:n 1 2 30")]
#[case("*F4:N 1 2 30")]
#[case("f4:n   1   2   30  ")]
fn tally_card_prefix(mut deck: Deck, #[case] card: &str) {
    deck.card = cards(&[card]);
    assert_eq!(deck.outp().tally_cells(4, "n").unwrap(), vec![1, 2, 30]);
}

#[rstest]
fn tally_card_first_match(mut deck: Deck) {
    deck.card = cards(&["f4:n 1", "fc4 flux in the first cell", "f4:n 2 30"]);
    assert_eq!(deck.outp().tally_cells(4, "n").unwrap(), vec![1]);
}

#[rstest]
fn tally_card_other_number(mut deck: Deck) {
    // f14 and f41 are not f4
    deck.card = cards(&["f14:n 30", "f41:n 2", "f4:n 1"]);
    assert_eq!(deck.outp().tally_cells(4, "n").unwrap(), vec![1]);
}

#[rstest]
#[case(&["f4:n 1 2", "        30 31", "        32"], vec![1, 2, 30, 31, 32])]
#[case(&["f4:n", "        1 2"], vec![1, 2])] // nothing on the first line
#[case(&["f4:n 1 2", "sd4 1 1"], vec![1, 2])] // next card
fn tally_card_continuation(mut deck: Deck, #[case] card: &[&str], #[case] expected: Vec<u32>) {
    deck.card = cards(card);
    assert_eq!(deck.outp().tally_cells(4, "n").unwrap(), expected);
}

#[rstest]
#[case(&["f4:n 1 2 $ fuel", "        30"], vec![1, 2])]
#[case(&["f4:n 1", "        2 $ clad", "        30"], vec![1, 2])]
#[case(&["f4:n 1 2", "   c   30", "        31"], vec![1, 2])] // comment continuation
#[case(&["f4:n 1 2", "c comments", "        30"], vec![1, 2])] // comment card
fn tally_card_truncated(mut deck: Deck, #[case] card: &[&str], #[case] expected: Vec<u32>) {
    deck.card = cards(card);
    assert_eq!(deck.outp().tally_cells(4, "n").unwrap(), expected);
}

#[rstest]
#[case(&["f4:n (1 2)"])]
#[case(&["f4:n 1 2 T"])]
#[case(&["f4:n 1", "        2 3i 10"])]
fn tally_card_unsupported(mut deck: Deck, #[case] card: &[&str]) {
    deck.card = cards(card);
    let err = deck.outp().tally_cells(4, "n").unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[rstest]
fn tally_card_missing(deck: Deck) {
    let outp = deck.outp();
    assert!(matches!(
        outp.tally_cells(5, "n"),
        Err(Error::TallyNotDeclared { tally: 5, .. })
    ));
    assert!(matches!(
        outp.tally_cells(4, "e"),
        Err(Error::TallyNotDeclared { tally: 4, .. })
    ));
}

#[test]
fn no_input_echo() {
    let mut reader = OutpReader::new();
    reader.set_strip_header(false);
    let outp = reader.read_str("    1-       title\n    2-       101 0 -1\n    3-       ");

    let err = outp.tally_cells(4, "n").unwrap_err();
    assert!(matches!(err, Error::DelimiterNotFound { found: 1 }));
}

// ! Result block variants

#[rstest]
fn results_with_cell_list_row(deck: Deck) {
    // the real layout opens with a row listing every cell
    let report = deck.report().replacen(
        "           volumes\n \n",
        "           volumes\n \n                   cell:         1          2         30\n                         4.18879E+03  2.09440E+03  1.04720E+03\n \n",
        1,
    );
    let mut reader = OutpReader::new();
    reader.set_strip_header(false);
    let outp = reader.read_str(&report);

    let results = outp.tally_values(4, None).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[&2], result(2.25e-4, 0.1));
}

#[rstest]
fn results_with_partial_header(mut deck: Deck) {
    // a stray copy of the first cell row before the cycle starts
    let rows = deck.result_rows();
    deck.results.clear();
    let report = deck.report().replacen(
        "           volumes\n \n",
        &format!("           volumes\n \n cell  1\n{}\n", rows.join("\n")),
        1,
    );
    let mut reader = OutpReader::new();
    reader.set_strip_header(false);
    let results = reader.read_str(&report).tally_values(4, None).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[&1], result(1.5e-3, 0.02));
    assert_eq!(results[&30], result(0.0, 0.0));
}

#[rstest]
fn results_skip_groups(mut deck: Deck) {
    deck.results.insert(1, ("(1 2)".to_string(), result(9.0, 0.5)));
    let results = deck.outp().tally_values(4, None).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[&1].value, 1.5e-3);
    assert_eq!(results[&2].value, 2.25e-4);
}

#[rstest]
fn results_filtered(deck: Deck) {
    let outp = deck.outp();

    let results = outp.tally_values(4, Some(&[30, 1][..])).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.contains_key(&30));

    let err = outp.tally_values(4, Some(&[1, 5][..])).unwrap_err();
    assert!(matches!(err, Error::CellNotInTally { cell: 5, tally: 4 }));
    assert!(err.is_key_error());
}

#[rstest]
fn results_bad_value(deck: Deck) {
    let report = deck.report().replace("1.5e-3 0.02", "1.5e-3 ******");
    let mut reader = OutpReader::new();
    reader.set_strip_header(false);

    let err = reader.read_str(&report).tally_values(4, None).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[rstest]
fn results_empty(mut deck: Deck) {
    deck.results.clear();
    let err = deck.outp().tally_values(4, None).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

// ! Serialisation

#[rstest]
fn serialise(deck: Deck) {
    let outp = deck.outp();

    let json = serde_json::to_value(outp.cell(2).unwrap()).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["material"], 1);
    assert_eq!(json["volume"], 4188.79 * 0.5);

    let json = serde_json::to_value(outp.tally_values(4, Some(&[1][..])).unwrap()).unwrap();
    assert_eq!(json["1"]["value"], 1.5e-3);
    assert_eq!(json["1"]["error"], 0.02);

    let json = serde_json::to_value(outp.status()).unwrap();
    assert_eq!(json["fatal_error"], false);
}
