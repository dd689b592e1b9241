use std::io::{self, Write};

/// Fifty `=` characters framing each file header.
pub const DELIMITER: &str = "==================================================";

/// Fifty `-` characters framing the console log.
pub const RULE: &str = "--------------------------------------------------";

pub struct OutputGenerator;

impl OutputGenerator {
    /// Writes one block: delimiter, `FILE:` header, delimiter, content, newline.
    /// Content is copied verbatim.
    pub fn write_block<W: Write>(out: &mut W, relative_path: &str, content: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", DELIMITER)?;
        writeln!(out, "FILE: {}", relative_path)?;
        writeln!(out, "{}", DELIMITER)?;
        out.write_all(content.as_bytes())?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_are_fifty_wide() {
        assert_eq!(DELIMITER.len(), 50);
        assert!(DELIMITER.chars().all(|c| c == '='));
        assert_eq!(RULE.len(), 50);
        assert!(RULE.chars().all(|c| c == '-'));
    }

    #[test]
    fn block_layout() {
        let mut out = Vec::new();
        OutputGenerator::write_block(&mut out, "src/app.ts", "export {};\n").unwrap();

        let expected = format!(
            "\n{d}\nFILE: src/app.ts\n{d}\nexport {{}};\n\n",
            d = DELIMITER
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn content_is_not_escaped() {
        let mut out = Vec::new();
        let tricky = format!("{}\nFILE: fake.ts\r\n", DELIMITER);
        OutputGenerator::write_block(&mut out, "a.ts", &tricky).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with(&format!("{}\n", tricky)));
    }

    #[test]
    fn empty_file_still_gets_a_block() {
        let mut out = Vec::new();
        OutputGenerator::write_block(&mut out, "empty.json", "").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(&format!("FILE: empty.json\n{}\n\n", DELIMITER)));
    }
}
