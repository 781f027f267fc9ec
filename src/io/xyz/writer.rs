use crate::io::error::Error;
use crate::model::structure::Structure;
use std::io::Write;

/// Serializes a structure in the fixed XYZ field layout: count line,
/// comment line, one record per atom with the element left-justified
/// in a 2-character minimum field and coordinates printed to six
/// decimal places in 12-character columns, then any preserved
/// trailing lines verbatim.
pub fn write<W: Write>(mut writer: W, structure: &Structure) -> Result<(), Error> {
    writeln!(writer, "{}", structure.atom_count())?;
    writeln!(writer, "{}", structure.comment)?;

    for atom in &structure.atoms {
        writeln!(
            writer,
            "{:<2}  {:>12.6}  {:>12.6}  {:>12.6}",
            atom.element, atom.position[0], atom.position[1], atom.position[2]
        )?;
    }

    for line in &structure.extra_lines {
        writeln!(writer, "{line}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::xyz::read;
    use crate::model::atom::Atom;
    use std::io::Cursor;

    fn sample() -> Structure {
        Structure {
            atoms: vec![
                Atom::new("Ir", [0.0, 0.0, 0.0]),
                Atom::new("C", [1.9, -0.25, 12.5]),
            ],
            comment: "two atoms".to_string(),
            extra_lines: vec!["tail A".to_string(), "tail B".to_string()],
        }
    }

    #[test]
    fn emits_fixed_field_layout() {
        let mut buf = Vec::new();
        write(&mut buf, &sample()).expect("write");

        let text = String::from_utf8(buf).expect("utf8");
        let expected = "\
2
two atoms
Ir      0.000000      0.000000      0.000000
C       1.900000     -0.250000     12.500000
tail A
tail B
";
        assert_eq!(text, expected);
    }

    #[test]
    fn writes_and_reads_back_consistently() {
        let original = sample();

        let mut buf = Vec::new();
        write(&mut buf, &original).expect("write");
        let roundtrip = read(Cursor::new(buf)).expect("read back");

        assert_eq!(roundtrip, original);
    }

    #[test]
    fn empty_structure_is_header_only() {
        let structure = Structure {
            comment: "nothing".to_string(),
            ..Structure::new()
        };

        let mut buf = Vec::new();
        write(&mut buf, &structure).expect("write");

        assert_eq!(String::from_utf8(buf).unwrap(), "0\nnothing\n");
    }

    #[test]
    fn wide_labels_push_past_minimum_field() {
        let structure = Structure {
            atoms: vec![Atom::new("Cl17", [1.0, 2.0, 3.0])],
            comment: String::new(),
            extra_lines: Vec::new(),
        };

        let mut buf = Vec::new();
        write(&mut buf, &structure).expect("write");

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Cl17      1.000000"));
    }
}
