//! Waveshare 7.5" V2 panel over Raspberry Pi SPI and GPIO.
//!
//! Wiring follows the stock e-Paper HAT: SPI CE0 for chip select,
//! BUSY on GPIO 24, DC on GPIO 25, RST on GPIO 17.

use anyhow::Context;
use epd_waveshare::epd7in5_v2::{Epd7in5, HEIGHT, WIDTH};
use epd_waveshare::prelude::WaveshareDisplay;
use linux_embedded_hal::{
    gpio_cdev::{Chip, LineRequestFlags},
    spidev::{SpiModeFlags, SpidevOptions},
    CdevPin, Delay, SpidevDevice,
};
use thiserror::Error;

use crate::driver::DisplayDriver;
use crate::frame::Frame;

/// Failures talking to the physical panel.
#[derive(Debug, Error)]
pub enum HardwareError {
    /// An SPI transfer (or a panel command issued over it) failed.
    #[error("SPI transfer failed: {0:?}")]
    Spi(linux_embedded_hal::SPIError),
    /// The frame buffer does not match the panel's expected size.
    #[error("frame buffer is {got} bytes, panel expects {want}")]
    FrameSize {
        /// Bytes in the pushed frame.
        got: usize,
        /// Bytes the panel's full-frame transfer requires.
        want: usize,
    },
}

/// [`DisplayDriver`] for the 800×480 Waveshare 7.5" V2 e-paper panel.
pub struct Epd7in5Driver {
    spi: SpidevDevice,
    epd: Epd7in5<SpidevDevice, CdevPin, CdevPin, CdevPin, Delay>,
    delay: Delay,
}

impl Epd7in5Driver {
    /// Open the SPI device and GPIO lines and run the panel's power-on
    /// init sequence.
    pub fn connect(spi_path: &str, gpio_chip: &str) -> anyhow::Result<Self> {
        tracing::info!(spi_path, gpio_chip, "connecting e-paper panel");

        let mut spi = SpidevDevice::open(spi_path).context("opening SPI device")?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(4_000_000)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options).context("configuring SPI")?;

        let mut chip = Chip::new(gpio_chip).context("opening GPIO chip")?;
        let busy = request_pin(&mut chip, 24, LineRequestFlags::INPUT, "folio-busy")?;
        let dc = request_pin(&mut chip, 25, LineRequestFlags::OUTPUT, "folio-dc")?;
        let rst = request_pin(&mut chip, 17, LineRequestFlags::OUTPUT, "folio-rst")?;

        let mut delay = Delay;
        let epd = Epd7in5::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(|e| anyhow::anyhow!("initializing panel: {e:?}"))?;

        Ok(Self { spi, epd, delay })
    }

    /// Bytes a full frame for this panel must contain.
    pub fn frame_bytes() -> usize {
        (WIDTH as usize / 8) * HEIGHT as usize
    }
}

fn request_pin(
    chip: &mut Chip,
    offset: u32,
    flags: LineRequestFlags,
    label: &'static str,
) -> anyhow::Result<CdevPin> {
    let line = chip
        .get_line(offset)
        .with_context(|| format!("getting GPIO line {offset}"))?;
    let handle = line
        .request(flags, 0, label)
        .with_context(|| format!("requesting GPIO line {offset}"))?;
    CdevPin::new(handle).with_context(|| format!("wrapping GPIO line {offset}"))
}

impl DisplayDriver for Epd7in5Driver {
    type Error = HardwareError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.epd
            .wake_up(&mut self.spi, &mut self.delay)
            .map_err(HardwareError::Spi)
    }

    fn push(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let want = Self::frame_bytes();
        if frame.data().len() != want {
            return Err(HardwareError::FrameSize {
                got: frame.data().len(),
                want,
            });
        }
        self.epd
            .update_frame(&mut self.spi, frame.data(), &mut self.delay)
            .map_err(HardwareError::Spi)?;
        self.epd
            .display_frame(&mut self.spi, &mut self.delay)
            .map_err(HardwareError::Spi)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.epd
            .clear_frame(&mut self.spi, &mut self.delay)
            .map_err(HardwareError::Spi)
    }

    fn sleep(&mut self) -> Result<(), Self::Error> {
        self.epd
            .sleep(&mut self.spi, &mut self.delay)
            .map_err(HardwareError::Spi)
    }
}
