use super::labels::{self, Label};
use super::Record;

/// Split a line sequence into one [`Record`] per Name-labeled line.
///
/// Lines before the first Name label belong to no block and are dropped.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if labels::classify(lines[i].as_ref()).label != Label::Name {
            i += 1;
            continue;
        }
        let (record, next) = scan_block(lines, i);
        records.push(record);
        i = next;
    }

    records
}

/// Build the record for the block whose Name line sits at `start`.
/// Returns the record and the index of the next unconsumed line: the next
/// Name line, or `lines.len()`.
///
/// `start` must index a Name-labeled line; `segment` only calls it there.
fn scan_block<S: AsRef<str>>(lines: &[S], start: usize) -> (Record, usize) {
    let head = labels::classify(lines[start].as_ref());
    debug_assert_eq!(head.label, Label::Name);

    let mut record = Record {
        full_name: head.remainder,
        ..Record::default()
    };

    for (j, line) in lines.iter().enumerate().skip(start + 1) {
        let tagged = labels::classify(line.as_ref());
        match tagged.label {
            Label::Name => return (record, j),
            Label::Title => record.job_title = tagged.remainder,
            Label::Company => record.company = tagged.remainder,
            Label::Email | Label::None => {
                if let Some(email) = tagged.email_candidate() {
                    record.email = email.to_string();
                }
            }
        }
    }

    (record, lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, title: &str, company: &str, email: &str) -> Record {
        Record {
            full_name: name.into(),
            job_title: title.into(),
            company: company.into(),
            email: email.into(),
        }
    }

    #[test]
    fn two_contacts() {
        let lines = [
            "Name: Alice Smith",
            "Title: Engineer",
            "Company: Acme",
            "alice@acme.com",
            "Name: Bob Jones",
            "Position: Manager",
        ];
        assert_eq!(
            segment(&lines),
            vec![
                rec("Alice Smith", "Engineer", "Acme", "alice@acme.com"),
                rec("Bob Jones", "Manager", "", ""),
            ]
        );
    }

    #[test]
    fn preamble_dropped_and_bare_name_label() {
        let lines = ["Random preamble", "Name:"];
        assert_eq!(segment(&lines), vec![Record::default()]);
    }

    #[test]
    fn no_name_label_no_records() {
        let lines = ["Title: Engineer", "bob@example.com"];
        assert!(segment(&lines).is_empty());
    }

    #[test]
    fn empty_input() {
        let lines: [&str; 0] = [];
        assert!(segment(&lines).is_empty());
    }

    #[test]
    fn consecutive_name_lines() {
        let lines = ["Name: A", "Name: B", "Name: C"];
        let names: Vec<_> = segment(&lines).into_iter().map(|r| r.full_name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn last_title_wins() {
        let lines = ["Name: X", "Title: A", "Role: B"];
        assert_eq!(segment(&lines)[0].job_title, "B");
    }

    #[test]
    fn last_company_wins() {
        let lines = ["Name: X", "Company: A", "Organization: B"];
        assert_eq!(segment(&lines)[0].company, "B");
    }

    #[test]
    fn email_guard_skips_addressless_candidate() {
        let lines = ["Name: X", "Email: not-an-address", "bob@example.com"];
        assert_eq!(segment(&lines)[0].email, "bob@example.com");
    }

    #[test]
    fn invalid_email_does_not_clear_previous() {
        let lines = ["Name: X", "Email: bob@example.com", "Email: n/a"];
        assert_eq!(segment(&lines)[0].email, "bob@example.com");
    }

    #[test]
    fn last_valid_email_wins() {
        let lines = ["Name: X", "Email: a@x.com", "reach me at b@y.com"];
        assert_eq!(segment(&lines)[0].email, "reach me at b@y.com");
    }

    #[test]
    fn unmatched_lines_ignored() {
        let lines = ["Name: X", "Likes hiking", "Phone: 555-1234"];
        assert_eq!(segment(&lines), vec![rec("X", "", "", "")]);
    }

    #[test]
    fn fields_do_not_leak_across_blocks() {
        let lines = ["Name: A", "Company: Acme", "Name: B"];
        let records = segment(&lines);
        assert_eq!(records[0].company, "Acme");
        assert_eq!(records[1].company, "");
    }

    #[test]
    fn scan_block_reports_next_name_line() {
        let lines = ["Name: A", "Title: T", "Name: B", "x"];
        let (record, next) = scan_block(&lines, 0);
        assert_eq!(record.job_title, "T");
        assert_eq!(next, 2);
        let (_, next) = scan_block(&lines, 2);
        assert_eq!(next, lines.len());
    }

    #[test]
    fn segmenting_twice_is_identical() {
        let lines = ["intro", "Name: A", "a@x.com", "Name: B", "Role: R"];
        assert_eq!(segment(&lines), segment(&lines));
    }

    #[test]
    fn one_record_per_name_line_in_order() {
        let md = std::fs::read_to_string("tests/fixtures/contacts.txt").unwrap();
        let lines: Vec<&str> = md.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let name_lines: Vec<String> = lines
            .iter()
            .map(|l| labels::classify(l))
            .filter(|m| m.label == Label::Name)
            .map(|m| m.remainder)
            .collect();
        let records = segment(&lines);
        assert_eq!(records.len(), name_lines.len());
        let names: Vec<String> = records.iter().map(|r| r.full_name.clone()).collect();
        assert_eq!(names, name_lines);
    }

    #[test]
    fn contacts_fixture() {
        let md = std::fs::read_to_string("tests/fixtures/contacts.txt").unwrap();
        let lines: Vec<&str> = md.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let records = segment(&lines);
        assert_eq!(records.len(), 4, "got: {:?}", records);
        assert_eq!(records[0], rec("Grace Hopper", "Rear Admiral", "US Navy", "grace@navy.mil"));
        assert_eq!(records[1].email, "ada@engine.org");
        assert_eq!(records[2].company, "Bell Labs, Inc.");
        assert_eq!(records[3], rec("Ken Thompson", "", "", ""));
    }
}
