#![no_std]
#![no_main]

mod hw;
pub use hw::*;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use microbit_bsp::{
    embassy_nrf::{
        bind_interrupts,
        gpio::{AnyPin, Level, Output, OutputDrive},
        peripherals, pwm,
        pwm::SimplePwm,
        saadc, twim,
    },
    Button, Microbit,
};
use modesense::*;

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    let board = Microbit::default();

    bind_interrupts!(struct Irqs {
        SAADC => saadc::InterruptHandler;
        SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    });

    let mic_power = Output::new(AnyPin::from(board.micen), Level::High, OutputDrive::HighDrive);
    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_12BIT;
    let saadc = saadc::Saadc::new(
        board.saadc,
        Irqs,
        saadc_config,
        [
            saadc::ChannelConfig::single_ended(board.p1),
            saadc::ChannelConfig::single_ended(board.microphone),
            saadc::ChannelConfig::single_ended(board.p2),
        ],
    );
    let sensors = Sensors::new(saadc, board.btn_a, board.btn_b, mic_power).await;

    let led = SimplePwm::new_1ch(board.pwm0, board.p9);
    let speaker = SimplePwm::new_1ch(board.pwm1, board.speaker);
    let outputs = Outputs::new(led, speaker);

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = twim::Twim::new(board.twispi0, Irqs, board.p20, board.p19, i2c_config);
    let oled = match Oled::new(i2c) {
        Ok(oled) => oled,
        Err(e) => panic!("display init failed: {:?}", e),
    };

    let config = Config::default();
    rprintln!("modesense: tick {} ms", config.tick_period.as_millis());
    let dispatcher = Dispatcher::new(sensors, outputs, oled, config);

    match dispatcher.run().await {
        Ok(never) => match never {},
        Err(e) => panic!("display failure: {:?}", e),
    }
}
