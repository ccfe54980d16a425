use rxword::{Consistency, Error, Layout, Puzzle, SolveOptions};
use std::{collections::BTreeMap, io::Write};

fn puzzle(text: &str) -> Puzzle {
    text.parse()
        .unwrap_or_else(|err| panic!("failed to parse puzzle: {err}"))
}

fn strict() -> SolveOptions {
    SolveOptions {
        consistency: Consistency::All,
        ..SolveOptions::default()
    }
}

#[test]
fn test_shared_position_scenario() {
    let mut puzzle = puzzle("AB\t1,2\nA.\t1,3\n");
    let tally = puzzle.solve(&SolveOptions::default());

    assert_eq!(puzzle.queries()[0].candidates(), &["AB"]);
    assert_eq!(puzzle.queries()[1].candidates().len(), 36);
    assert!(puzzle.queries()[1].candidates().iter().all(|c| c.starts_with('A')));

    assert_eq!(tally.count(1, 'A'), 37);
    assert_eq!(tally.count(2, 'B'), 1);
    assert_eq!(tally.top(1), Some('A'));
    assert_eq!(tally.top(2), Some('B'));
    // Every character ties at position 3; the lowest wins.
    assert_eq!(tally.top(3), Some('0'));
}

#[test]
fn test_fixed_letters() {
    let mut puzzle = puzzle("[AB]C\t1,2\n[AB]D\t1,3\n");
    let options = SolveOptions {
        fixed: BTreeMap::from([(1, 'B')]),
        ..SolveOptions::default()
    };
    let tally = puzzle.solve(&options);

    assert_eq!(puzzle.queries()[0].candidates(), &["BC"]);
    assert_eq!(puzzle.queries()[1].candidates(), &["BD"]);
    assert_eq!(tally.counts(1), Some(&BTreeMap::from([('B', 2)])));
}

#[test]
fn test_any_consistency_keeps_uncrossed_letters() {
    let mut puzzle = puzzle("[AB]C\t1,2\n[BC]\t1\n");
    let tally = puzzle.solve(&SolveOptions::default());

    assert_eq!(tally.count(1, 'A'), 1);
    assert_eq!(tally.count(1, 'B'), 2);
    assert_eq!(tally.count(1, 'C'), 1);
    assert_eq!(tally.top(1), Some('B'));
}

#[test]
fn test_all_consistency_intersects_crossings() {
    let mut puzzle = puzzle("[AB]C\t1,2\n[BC]\t1\n");
    let tally = puzzle.solve(&strict());

    assert_eq!(puzzle.queries()[0].candidates(), &["BC"]);
    assert_eq!(puzzle.queries()[1].candidates(), &["B"]);
    assert_eq!(tally.count(1, 'A'), 0);
    assert_eq!(tally.count(1, 'B'), 2);
}

#[test]
fn test_all_consistency_repeats_until_stable() {
    let mut puzzle = puzzle("(AX|BY)\t1,2\n[XZ]\t2\n(A|B)C\t1,3\n");
    let tally = puzzle.solve(&strict());

    assert_eq!(puzzle.queries()[0].candidates(), &["AX"]);
    assert_eq!(puzzle.queries()[2].candidates(), &["AC"]);
    assert_eq!(tally.count(1, 'B'), 0);
    assert_eq!(tally.ranking(), BTreeMap::from([(1, 'A'), (2, 'X'), (3, 'C')]));
}

#[test]
fn test_render_answer() {
    let mut puzzle = puzzle("# a tiny grid\nH[IO]\t1,2\n[HJ]I\t1,2\n");
    let tally = puzzle.solve(&strict());
    let layout: Layout = "1 2".parse().unwrap();
    assert_eq!(layout.render(&tally.ranking()), "H I");
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        "A\t1\nB".parse::<Puzzle>(),
        Err(Error::MissingPositions { line: 2 })
    ));
    assert!(matches!(
        "A\t1,x".parse::<Puzzle>(),
        Err(Error::InvalidPosition { line: 1, ref value, .. }) if value == "x"
    ));
    match "# ok\nA\\q\t1".parse::<Puzzle>() {
        Err(Error::Pattern { line, source }) => {
            assert_eq!(line, 2);
            assert!(matches!(*source, Error::InvalidEscape { lit: 'q', .. }));
        }
        other => panic!("expected a pattern error, got {other:?}"),
    }
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# pattern\tpositions").unwrap();
    writeln!(file, "(A|B)\\1\t10,11").unwrap();
    writeln!(file, "[^B]+\t-1,10").unwrap();

    let mut puzzle = Puzzle::load(file.path()).unwrap();
    assert_eq!(puzzle.queries().len(), 2);
    assert_eq!(puzzle.queries()[1].positions(), &[-1, 10]);

    let tally = puzzle.solve(&strict());
    assert_eq!(puzzle.queries()[0].candidates(), &["AA"]);
    assert_eq!(tally.top(11), Some('A'));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Puzzle::load(dir.path().join("missing.txt")),
        Err(Error::Io(_))
    ));
}
