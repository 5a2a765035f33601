use color_print::cformat;

use crate::error::Error;

/// Render an error with the file location and the offending source line.
pub fn render(err: &Error, file: &str, text: &str) -> String {
    let mut out = cformat!("<red,bold>error</>: {}\n", err);
    if let Some(line_num) = err.line() {
        let line_content = text.lines().nth(line_num - 1).unwrap_or("");
        out += &cformat!("     <blue>--></> <underline>{}:{}</>\n", file, line_num);
        out += &cformat!("      <blue>|</>\n");
        out += &cformat!(" <blue>{:>4} |</> {}\n", line_num, line_content);
        out += &cformat!("      <blue>|</>\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;

    #[test]
    fn points_at_source_line() {
        let text = "halt\n  jmp NOWHERE ; x\n";
        let err = assemble(text).unwrap_err();
        let msg = render(&err, "prog.asm", text);
        assert!(msg.contains("Undefined operand: `NOWHERE`"));
        assert!(msg.contains("prog.asm:2"));
        assert!(msg.contains("  jmp NOWHERE ; x"));
    }

    #[test]
    fn no_location_without_line() {
        let err = crate::read_source(std::path::Path::new("/nonexistent/prog.asm")).unwrap_err();
        let msg = render(&err, "/nonexistent/prog.asm", "");
        assert!(msg.contains("Failed to open file"));
        assert!(!msg.contains("-->"));
    }
}
