//! CSV export of sampled field profiles.

use std::io::{self, Write};

use crate::math::Scalar;
use crate::profile::FieldProfile;

/// Writes `x_m,b_t` rows for every sample of `profile`.
pub fn write_profile_csv<W: Write>(w: W, profile: &FieldProfile) -> io::Result<()> {
    write_profile_csv_scaled(w, profile, "b_t", 1.0)
}

/// Writes `x_m,<column>` rows with the field multiplied by `factor`.
///
/// Use with [`crate::constants::TESLA_TO_MILLITESLA`] and a `b_mt` column for
/// display-ready output.
pub fn write_profile_csv_scaled<W: Write>(
    mut w: W,
    profile: &FieldProfile,
    column: &str,
    factor: Scalar,
) -> io::Result<()> {
    writeln!(w, "x_m,{column}")?;
    for (x, b) in profile.samples() {
        writeln!(w, "{:.16e},{:.16e}", x, b * factor)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use crate::constants::TESLA_TO_MILLITESLA;

    #[test]
    fn writes_header_and_one_row_per_sample() {
        let profile = FieldProfile::from_config(&ProfileConfig::default().with_samples(3)).unwrap();
        let mut buf = Vec::new();
        write_profile_csv(&mut buf, &profile).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "x_m,b_t");
        assert!(lines[1].starts_with("-1.5000000000000000e-6,"));

        let middle: Vec<Scalar> = lines[2].split(',').map(|v| v.parse().unwrap()).collect();
        assert_eq!(middle[0], 0.0);
        assert_eq!(middle[1], profile.field[1]);
    }

    #[test]
    fn scaled_export_uses_column_and_factor() {
        let profile = FieldProfile::from_config(&ProfileConfig::default().with_samples(3)).unwrap();
        let mut buf = Vec::new();
        write_profile_csv_scaled(&mut buf, &profile, "b_mt", TESLA_TO_MILLITESLA).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("x_m,b_mt\n"));
        let row: Vec<Scalar> = text.lines().nth(2).unwrap().split(',').map(|v| v.parse().unwrap()).collect();
        approx::assert_relative_eq!(row[1], 15.191_32, max_relative = 1.0e-6);
    }

    #[test]
    fn empty_profile_writes_header_only() {
        let mut buf = Vec::new();
        write_profile_csv(&mut buf, &FieldProfile::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x_m,b_t\n");
    }
}
