//! Compositor demo firmware
//! ========================================
//! needs to be run in WSL2 terminal
//! source ~/export-esp.sh
//! cargo run --release --features esp32s3
//! ========================================
//!
//! Draws a test scene (lines, rectangles, centered text) into layer 0 and
//! keeps flipping it with a marker sweeping across the bottom of the screen.
//! Layer 1 is cleared to transparent and flipped once.

//% CHIPS: esp32s3
//% FEATURES: esp-hal/unstable

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

use esp_backtrace as _;

use esp_hal::{delay::Delay, main, psram, Config};

use lcd_compositor::{
    display::{setup_panel, PanelType},
    logging,
    wiring::init_display_pins,
    Compositor, Coord, LayerId, PanelConfig,
};

use lcd_compositor::panel::co5300::{CO5300_HEIGHT, CO5300_WIDTH};

const FRAME_MS: u32 = 50;

fn draw_scene(disp: &mut Compositor<PanelType<'static>>, frame: u32) {
    let (w, h) = (CO5300_WIDTH, CO5300_HEIGHT);
    let (cx, cy) = (w / 2, h / 2);

    disp.set_draw_buffer(LayerId::Layer0);
    disp.set_draw_color(0xFFFFu16);
    disp.clear_buffer();

    // cross-hair + diagonal
    disp.set_draw_color(0xF000u16);
    disp.draw_line(Coord::new(0, cy), Coord::new(w - 1, cy));
    disp.draw_line(Coord::new(10, cy + 4), Coord::new(w - 11, cy + 4));
    disp.draw_line(Coord::new(cx, 0), Coord::new(cx, h - 1));
    disp.draw_line(Coord::new(0, 0), Coord::new(w - 1, h - 1));

    disp.draw_rect(Coord::new(cx - 120, cy - 70), Coord::new(cx + 120, cy + 70));

    disp.set_draw_color(0xF00Fu16);
    disp.draw_rect_fill(Coord::new(cx - 60, cy - 35), Coord::new(cx + 60, cy + 35));

    // text
    disp.set_draw_color(0xF000u16);
    disp.set_font_by_index(0);
    disp.draw_str_c(Coord::new(cx, 100), "Hello World!");

    disp.set_draw_color(0xF077u16);
    disp.draw_str_c(Coord::new(cx, 130), "Welcome to");

    disp.set_draw_color(0xF337u16);
    disp.draw_str_c(Coord::new(cx, 330), "ABCDefghIJKLmnopQRSTuvwxYZ!@#$%^");

    // sweeping marker
    let x = (frame * 4 % (w as u32 - 20)) as u16;
    disp.set_draw_color(0xFF00u16);
    disp.draw_rect_fill(Coord::new(x, h - 60), Coord::new(x + 19, h - 50));
}

#[main]
fn main() -> ! {
    let peripherals = esp_hal::init(Config::default());

    // Frame buffers live in PSRAM
    esp_alloc::psram_allocator!(&peripherals.PSRAM, psram);

    logging::init(log::LevelFilter::Info);

    let pins = init_display_pins(peripherals);
    let panel = setup_panel(pins, LayerId::Layer0);

    let config = PanelConfig::new(CO5300_WIDTH, CO5300_HEIGHT).with_visible_layer(LayerId::Layer0);
    let mut disp = Compositor::new(panel, config);
    disp.init().expect("display init failed");
    log::info!("LCD: Initialized");

    disp.set_draw_buffer(LayerId::Layer1);
    disp.set_draw_color(0x0000u16);
    disp.clear_buffer();
    if let Err(e) = disp.flip_layer1() {
        log::error!("LCD: layer 1 flip failed: {}", e);
    }

    let delay = Delay::new();
    let mut frame: u32 = 0;
    loop {
        draw_scene(&mut disp, frame);
        if let Err(e) = disp.flip_layer0() {
            log::error!("LCD: flip failed: {}", e);
        }
        frame = frame.wrapping_add(1);
        delay.delay_millis(FRAME_MS);
    }
}
