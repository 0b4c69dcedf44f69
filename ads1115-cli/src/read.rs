use ads1115_hal::config::{GainRange, OperatingMode};
use ads1115_hal::register::RawSample;
use ads1115_hal::{ADS1115, RegisterTransport};
use anyhow::Context;
use embedded_hal::delay::DelayNs;

/// Take `count` samples and print each one.
///
/// Single-shot samples each trigger their own conversion. In continuous mode the
/// configuration is written once and the conversion register is polled, sleeping
/// one conversion period before each read.
pub(crate) fn action<T, D>(adc: &mut ADS1115<T, D>, count: u32, raw: bool) -> anyhow::Result<()>
where
    T: RegisterTransport,
    D: DelayNs,
{
    let config = adc.config();
    let continuous = config.mode == OperatingMode::Continuous;
    if continuous {
        adc.write_config()
            .context("Failed to start continuous conversion")?;
    }

    for n in 0..count {
        if continuous {
            std::thread::sleep(config.data_rate.conversion_time());
        }
        let sample = adc
            .sample_raw(!continuous)
            .with_context(|| format!("Failed to read sample {}", n + 1))?;
        print_sample(sample, raw, config.gain);
    }
    Ok(())
}

fn print_sample(sample: RawSample, raw: bool, gain: GainRange) {
    if raw {
        println!("{:#06x}\t{}", sample.bits(), sample.signed());
    } else {
        println!("{:.6} V", sample.to_voltage(gain));
    }
}
