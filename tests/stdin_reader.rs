use std::collections::HashSet;
use std::io::Cursor;

use collectf::RenameRegistry;
use collectf::input::spawn_line_reader;

#[test]
fn lines_arrive_in_input_order() {
    let input = b"first.txt\nsecond.txt\nthird.txt\n".to_vec();
    let rx = spawn_line_reader(Cursor::new(input));
    let got: Vec<String> = rx.iter().collect();
    assert_eq!(got, ["first.txt", "second.txt", "third.txt"]);
}

#[test]
fn missing_trailing_newline_still_yields_last_line() {
    let rx = spawn_line_reader(Cursor::new(b"a.txt\nb.txt".to_vec()));
    let got: Vec<String> = rx.iter().collect();
    assert_eq!(got, ["a.txt", "b.txt"]);
}

#[test]
fn reader_feeding_registry_yields_unique_names() {
    // The full pipeline minus the filesystem: stream of colliding paths in,
    // pairwise-distinct names out.
    let input = b"a.txt\ndir/a.txt\nother/a.txt\na_1.txt\nREADME\nREADME\n".to_vec();
    let rx = spawn_line_reader(Cursor::new(input));

    let mut reg = RenameRegistry::new();
    let mut names = HashSet::new();
    let mut count = 0usize;
    for path in rx {
        assert!(names.insert(reg.resolve(&path)));
        count += 1;
    }
    assert_eq!(count, 6);
    assert_eq!(names.len(), 6);
}
