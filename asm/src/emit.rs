//! Output artifacts: `.mem` hex text, `.bin` raw bytes and the `.lst` listing.

use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Local;
use tracing::debug;

use crate::{
    error::{Error, ErrorKind},
    pass2::{Entry, Image},
    Assembly,
};

/// `<base>.<ext>`, keeping any dots already in `base`.
pub fn with_ext(base: &Path, ext: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// One uppercase two-digit hex byte per line.
pub fn mem_text(image: &Image) -> String {
    image.bytes().iter().map(|b| format!("{:02X}\n", b)).collect()
}

pub fn listing_row(entry: &Entry) -> String {
    match entry.shown() {
        [] => format!("      {:<10} {}", "", entry.source),
        [b0] => format!("{:04X}  {:02X}         {}", entry.addr, b0, entry.source),
        [b0, b1, ..] => format!(
            "{:04X}  {:02X} {:02X}     {}",
            entry.addr, b0, b1, entry.source
        ),
    }
}

/// Header, one row per listing entry, then the symbols sorted by name.
pub fn write_listing<W: Write>(
    out: &mut W,
    source_name: &str,
    generated: &str,
    asm: &Assembly,
) -> io::Result<()> {
    let last = asm.image.last_used();
    writeln!(out, "; LISTING FILE")?;
    writeln!(out, "; Source: {}", source_name)?;
    writeln!(out, "; Generated: {}", generated)?;
    writeln!(
        out,
        "; Memory used: 0x{:02X} bytes (0..0x{:02X})",
        last + 1,
        last
    )?;
    writeln!(out)?;

    writeln!(out, "ADDR  BYTES      SOURCE")?;
    writeln!(out, "====  =====     ========= ")?;
    for entry in &asm.listing {
        writeln!(out, "{}", listing_row(entry))?;
    }

    writeln!(out)?;
    writeln!(out, "SYMBOLS ({}):", asm.symbols.len())?;
    for (name, sym) in asm.symbols.sorted() {
        writeln!(out, "  {:<20} = 0x{:02X} ({:>3})", name, sym.value, sym.value)?;
    }
    Ok(())
}

/// Local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn create(path: &Path) -> Result<BufWriter<File>, Error> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ErrorKind::FileCreate(path.display().to_string(), e).into())
}

fn write_file(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), Error> {
    let mut file = create(path)?;
    body(&mut file)
        .and_then(|_| file.flush())
        .map_err(|e| ErrorKind::FileWrite(path.display().to_string(), e))?;
    debug!(path = %path.display(), "wrote");
    Ok(())
}

/// Write `<base>.mem`, `<base>.bin` and `<base>.lst`, one after another.
pub fn write_outputs(base: &Path, source_name: &str, asm: &Assembly) -> Result<(), Error> {
    write_file(&with_ext(base, "mem"), |f| {
        f.write_all(mem_text(&asm.image).as_bytes())
    })?;
    write_file(&with_ext(base, "bin"), |f| f.write_all(asm.image.bytes()))?;
    let generated = timestamp_now();
    write_file(&with_ext(base, "lst"), |f| {
        write_listing(f, source_name, &generated, asm)
    })?;
    Ok(())
}
