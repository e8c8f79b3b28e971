//! motor-menu firmware - nRF52840 + HD44780 16x2 LCD.
//!
//! Task layout:
//!   - SysTick exception: records one tick per `TICK_PERIOD_US`
//!   - button tasks (×3): debounced presses → event channel
//!   - menu task: drains ticks, evaluates the menu, yields, repeats

#![no_std]
#![no_main]

mod ui;

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::exception;
use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_time::Delay;
use motor_menu::config::TICK_PERIOD_US;
use motor_menu::{MenuEvent, MenuTask, TickCounter};
use panic_probe as _;

use ui::buttons::button_task;
use ui::{ChannelEvents, Lcd, EVENTS};

/// Core clock feeding SysTick.
const CPU_HZ: u32 = 64_000_000;

/// Ticks recorded by SysTick, drained by the menu task.
static TICKS: TickCounter = TickCounter::new();

#[exception]
fn SysTick() {
    TICKS.on_tick();
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("motor-menu v{} starting", env!("CARGO_PKG_VERSION"));

    let p = embassy_nrf::init(Default::default());

    // Buttons
    unwrap!(spawner.spawn(button_task(
        p.P0_11.degrade(),
        MenuEvent::NavigateNext,
        EVENTS.sender()
    )));
    unwrap!(spawner.spawn(button_task(
        p.P0_12.degrade(),
        MenuEvent::Confirm,
        EVENTS.sender()
    )));
    unwrap!(spawner.spawn(button_task(
        p.P0_24.degrade(),
        MenuEvent::Cancel,
        EVENTS.sender()
    )));

    // LCD
    let out = |pin: AnyPin| Output::new(pin, Level::Low, OutputDrive::Standard);
    let lcd = Lcd::new(
        out(p.P1_01.degrade()),
        out(p.P1_02.degrade()),
        [
            out(p.P1_03.degrade()),
            out(p.P1_04.degrade()),
            out(p.P1_05.degrade()),
            out(p.P1_06.degrade()),
        ],
        Delay,
    );

    // Status LED (active-low on the DK), off until the menu is up.
    let led = Output::new(p.P0_13, Level::High, OutputDrive::Standard);

    // Tick source
    let mut cp = unwrap!(cortex_m::Peripherals::take());
    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(CPU_HZ / 1_000_000 * TICK_PERIOD_US - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_interrupt();
    cp.SYST.enable_counter();
    info!("SysTick every {} us", TICK_PERIOD_US);

    unwrap!(spawner.spawn(menu_task(lcd, led)));
}

#[embassy_executor::task]
async fn menu_task(mut lcd: Lcd, mut led: Output<'static>) -> ! {
    let mut task = MenuTask::init();
    let mut events = ChannelEvents(EVENTS.receiver());

    lcd.init();
    led.set_low();

    loop {
        task.update(&TICKS, &mut lcd, &mut events);
        yield_now().await;
    }
}
