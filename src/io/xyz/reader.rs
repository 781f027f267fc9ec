use crate::io::error::Error;
use crate::model::{atom::Atom, structure::Structure};
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let lines = collect_lines(reader)?;

    let mut cursor = 0;
    let (count_line_no, count_line) = next_data_line(&lines, &mut cursor)
        .ok_or_else(|| Error::parse(1, "missing atom count line"))?;
    let declared = parse_atom_count(&count_line, count_line_no)?;

    // The comment is the very next line, taken verbatim (it may be
    // blank, which is why next_data_line is not used here).
    let comment = match lines.get(cursor) {
        Some((_, content)) => content.clone(),
        None => {
            return Err(Error::parse(
                count_line_no,
                "missing comment line after atom count",
            ));
        }
    };
    cursor += 1;

    let atoms = parse_atom_block(&lines, &mut cursor, declared)?;

    let extra_lines = lines[cursor..]
        .iter()
        .map(|(_, content)| content.clone())
        .collect();

    Ok(Structure {
        atoms,
        comment,
        extra_lines,
    })
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|v| (i + 1, v))
                .map_err(|e| Error::Io { source: e })
        })
        .collect()
}

fn next_data_line(lines: &[(usize, String)], cursor: &mut usize) -> Option<(usize, String)> {
    while *cursor < lines.len() {
        let (ln, content) = &lines[*cursor];
        *cursor += 1;
        if content.trim().is_empty() {
            continue;
        }
        return Some((*ln, content.clone()));
    }
    None
}

fn parse_atom_count(line: &str, line_no: usize) -> Result<usize, Error> {
    line.trim().parse::<usize>().map_err(|_| {
        Error::parse(
            line_no,
            "atom count line must be a non-negative integer",
        )
    })
}

/// Consumes the next `declared` non-blank lines as atom records,
/// leaving `cursor` just past the last one.
fn parse_atom_block(
    lines: &[(usize, String)],
    cursor: &mut usize,
    declared: usize,
) -> Result<Vec<Atom>, Error> {
    let mut atoms = Vec::with_capacity(declared);

    while atoms.len() < declared {
        let Some((ln, raw)) = next_data_line(lines, cursor) else {
            return Err(Error::parse(
                lines.last().map(|(ln, _)| *ln).unwrap_or(0),
                format!(
                    "declared {} atoms but found only {} atom records",
                    declared,
                    atoms.len()
                ),
            ));
        };
        atoms.push(parse_atom_record(&raw, ln)?);
    }

    Ok(atoms)
}

fn parse_atom_record(raw: &str, line_no: usize) -> Result<Atom, Error> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(Error::parse(
            line_no,
            "atom record must have an element label and three coordinates",
        ));
    }

    let x = parts[1]
        .parse::<f64>()
        .map_err(|_| Error::parse(line_no, "invalid x coordinate in atom record"))?;
    let y = parts[2]
        .parse::<f64>()
        .map_err(|_| Error::parse(line_no, "invalid y coordinate in atom record"))?;
    let z = parts[3]
        .parse::<f64>()
        .map_err(|_| Error::parse(line_no, "invalid z coordinate in atom record"))?;

    Ok(Atom::new(parts[0], [x, y, z]))
}
