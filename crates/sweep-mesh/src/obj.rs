//! Wavefront OBJ export.

use std::io::Write;

use sweep_core::Result;

use crate::surface::Surface;

/// Write `surface` as OBJ `v`, `vn` and `f` records with 1-based indices.
pub fn write_obj<W: Write>(surface: &Surface, mut out: W) -> Result<()> {
    for p in &surface.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &surface.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for face in &surface.faces {
        let [a, b, c] = face.map(|i| i + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()?;
    Ok(())
}

impl Surface {
    pub fn write_obj<W: Write>(&self, out: W) -> Result<()> {
        write_obj(self, out)
    }

    pub fn to_obj_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        write_obj(self, &mut buf)?;
        String::from_utf8(buf).map_err(|e| sweep_core::SweepError::Invalid(e.to_string()))
    }
}
