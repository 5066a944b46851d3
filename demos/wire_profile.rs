use std::io;

use log::info;
use oersted_field::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Positional overrides: current (A), z (m), width (m), thickness (m).
    let args: Vec<Scalar> = std::env::args()
        .skip(1)
        .map(|a| a.parse::<Scalar>())
        .collect::<Result<_, _>>()?;
    let mut config = ProfileConfig::default();
    for (slot, value) in [
        &mut config.current,
        &mut config.observation_height,
        &mut config.width,
        &mut config.thickness,
    ]
    .into_iter()
    .zip(args)
    {
        *slot = value;
    }
    info!("{config:?}");

    let profile = FieldProfile::from_config(&config)?;
    if let Some((x, b)) = profile.peak() {
        info!("peak {:.4} mT at x = {:.3e} m", b * TESLA_TO_MILLITESLA, x);
    }

    write_profile_csv_scaled(io::stdout().lock(), &profile, "b_mt", TESLA_TO_MILLITESLA)?;
    Ok(())
}
