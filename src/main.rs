use sdl2::pixels::Color;
use std::time::Instant;

use title_menu::assets::TextureStore;
use title_menu::audio::KiraAudio;
use title_menu::config::{MenuConfig, DEFAULT_CONFIG_PATH};
use title_menu::host::SystemHost;
use title_menu::input_system::{InputHandler, InputSystem, MenuEvent};
use title_menu::menu::{MainMenu, INPUT_HANDLER_NAME};
use title_menu::navigation::NavigationQueue;
use title_menu::save::SaveDirectory;
use title_menu::screen::{ProgressLog, Screen, ScreenServices};
use title_menu::surface::CanvasSurface;

// Menu layout resolution
const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MenuConfig::load_from_file(DEFAULT_CONFIG_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = config.window_scale.max(1);
    let window = video_subsystem
        .window(
            "OpenDiablo2",
            SCREEN_WIDTH * window_scale,
            SCREEN_HEIGHT * window_scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    video_subsystem.text_input().start();

    let mut textures = TextureStore::new(&texture_creator, &config.asset_root);
    let mut audio = KiraAudio::new(&config.asset_root);
    let saves = SaveDirectory::new(config.save_directory()).map_err(|e| e.to_string())?;
    let navigation = NavigationQueue::new();
    let mut input = InputSystem::new();

    let mut menu = MainMenu::new(
        config,
        Box::new(navigation.clone()),
        Box::new(SystemHost),
        Box::new(saves),
    );

    let mut loading = ProgressLog::new();
    {
        let mut services = ScreenServices {
            assets: &mut textures,
            audio: &mut audio,
            input: &mut input,
        };
        menu.load(&mut services, &mut loading)?;
    }

    let mut last_frame = Instant::now();

    'running: loop {
        for event in input.poll_events(&mut event_pump) {
            match event {
                MenuEvent::Quit => break 'running,
                MenuEvent::MouseDown(mouse) => {
                    let consumed =
                        input.is_bound(INPUT_HANDLER_NAME) && menu.on_mouse_button_down(&mouse);
                    if !consumed {
                        menu.on_widget_press(&mouse);
                    }
                }
                MenuEvent::MouseUp(mouse) => {
                    menu.on_widget_release(&mouse);
                }
                MenuEvent::TextInput(text) => {
                    menu.on_text_input(&text);
                }
                MenuEvent::Backspace => {
                    menu.on_backspace();
                }
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        menu.advance(elapsed)?;

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        {
            let mut surface = CanvasSurface::new(&mut canvas, &mut textures);
            menu.render(&mut surface)?;
        }
        canvas.present();

        // Destination screens are not part of this application
        let requests = navigation.drain();
        if !requests.is_empty() {
            for request in &requests {
                log::info!("Leaving the title menu for {}", request);
            }
            break 'running;
        }

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    input.unbind_handler(INPUT_HANDLER_NAME);
    Ok(())
}
