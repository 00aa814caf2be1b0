use std::io::{Result, Write};
use std::path::Path;

/// Column limit the wrap decision is made against.
pub const LINE_WIDTH: usize = 80;

pub const FIRST_LINE_INDENT: &str = "   ";
pub const CONTINUATION_INDENT: &str = "    ";

pub const ELEMENT_TYPE: &str = "U8";
pub const SIZE_TYPE: &str = "Usize";

/// Writes `bytes` as a `U8 <name>[]` array declaration followed by its `Usize <name>_size`
/// constant.
///
/// Elements are rendered in decimal. A line is only extended while
/// `line.len() + 1 + token.len() < LINE_WIDTH`; otherwise the element starts a new line.
/// An empty slice still produces the (blank) first body line.
pub fn write_array<W>(mut writer: W, name: &str, bytes: &[u8]) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "{ELEMENT_TYPE} {name}[] = {{")?;

    let mut line = String::with_capacity(LINE_WIDTH + 1);
    line.push_str(FIRST_LINE_INDENT);

    for byte in bytes {
        let token = byte.to_string();

        if line.len() + 1 + token.len() < LINE_WIDTH {
            line.push(' ');
        } else {
            line.push('\n');
            writer.write_all(line.as_bytes())?;

            line.clear();
            line.push_str(CONTINUATION_INDENT);
        }

        line.push_str(&token);
        line.push(',');
    }

    writer.write_all(line.as_bytes())?;
    writeln!(writer)?;

    writeln!(writer, "}};")?;
    writeln!(writer, "{SIZE_TYPE} {name}_size = sizeof({name});")?;

    Ok(())
}

/// Reads the whole file at `path` and renders it with [`write_array`].
pub fn write_array_from_file<W, P>(writer: W, name: &str, path: P) -> Result<()>
where
    W: Write,
    P: AsRef<Path>,
{
    let raw_bytes = std::fs::read(path)?;
    write_array(writer, name, &raw_bytes)
}

#[cfg(test)]
pub fn make_array(name: &str, bytes: &[u8]) -> String {
    let mut output = Vec::new();
    write_array(&mut output, name, bytes).unwrap();
    String::from_utf8(output).unwrap()
}
