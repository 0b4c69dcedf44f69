use ads1115_hal::config::Config;
use ads1115_hal::{ADS1115, I2cTransport};
use anyhow::Context;
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};

use cli::Commands;

mod cli;
mod read;
mod settings;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();

    let bus = I2cdev::new(&cli.bus)
        .with_context(|| format!("Failed to open I2C bus {}", cli.bus.display()))?;
    let config = Config::from(&cli.input);
    log::debug!("Using {:#04x} on {} with\n{config}", cli.address, cli.bus.display());
    let mut adc = ADS1115::new(I2cTransport::new(bus), Delay, cli.address, config)?;

    match cli.command {
        Commands::Read { count, raw } => read::action(&mut adc, count, raw)?,
        Commands::Config => {
            let on_device = adc.read_config()?;
            println!("{on_device}");
        }
        Commands::Reset => adc.reset()?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::cli::Cli;

    use clap::{CommandFactory, Parser};

    #[test]
    fn check_cli_debug_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn input_settings_map_to_config() {
        use ads1115_hal::config::{ChannelSelector, Config, DataRate, GainRange, OperatingMode};

        let cli = Cli::parse_from([
            "ads1115-cli",
            "--address",
            "0x4a",
            "--channel",
            "ain2-ain3",
            "--gain",
            "0.512",
            "--mode",
            "continuous",
            "--data-rate",
            "860",
            "read",
        ]);
        assert_eq!(cli.address, 0x4A);
        assert_eq!(
            Config::from(&cli.input),
            Config {
                channel: ChannelSelector::Ain2Ain3,
                gain: GainRange::FSR_0_512V,
                mode: OperatingMode::Continuous,
                data_rate: DataRate::Sps860,
            }
        );
    }
}
