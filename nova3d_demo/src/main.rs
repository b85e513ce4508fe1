//! Nova3D headless demo
//!
//! Builds the demo scene (nine cubes in a row, two cameras), then plays a
//! scripted input sequence through the winit-backed `InputState`: walk,
//! look around, strafe and rise, switch camera, look up into the pitch
//! guard. Every frame is submitted to a renderer that only logs what it
//! would upload.
//!
//! Run with `--verbose` to see per-frame renderer output.

use nova_3d_engine::{engine_debug, engine_error, engine_info, engine_trace};
use nova_3d_engine::nova3d::{Engine, Error, Result};
use nova_3d_engine::nova3d::camera::{Camera, CameraDesc};
use nova_3d_engine::nova3d::input::InputState;
use nova_3d_engine::nova3d::log::{DefaultLogger, LogSeverity};
use nova_3d_engine::nova3d::render::{FrameConstants, ObjectConstants, Renderer};
use nova_3d_engine::nova3d::scene::{Entity, Scene};
use glam::{Vec3, Vec4};
use winit::event::{DeviceEvent, MouseButton};
use winit::keyboard::KeyCode;

const SOURCE: &str = "nova3d_demo";
const FRAME_TIME: f32 = 1.0 / 60.0;
const FRAME_COUNT: u32 = 120;
const INITIAL_SIZE: (u32, u32) = (1280, 720);

// ===== LOGGING RENDERER =====

/// Renderer that logs uploads instead of talking to a GPU
#[derive(Default)]
struct LoggingRenderer {
    frame_index: u64,
    draws_this_frame: u32,
    total_draws: u64,
}

impl Renderer for LoggingRenderer {
    fn begin_frame(&mut self, frame: &FrameConstants) -> Result<()> {
        self.draws_this_frame = 0;
        engine_trace!(
            "nova3d_demo::Renderer",
            "Frame {}: camera at {:?}, {} bytes of frame constants",
            self.frame_index,
            frame.camera_position,
            frame.as_bytes().len()
        );
        Ok(())
    }

    fn draw_object(&mut self, object: &ObjectConstants) -> Result<()> {
        if !object.world.is_finite() {
            return Err(Error::BackendError(format!(
                "non-finite world matrix in frame {}",
                self.frame_index
            )));
        }
        self.draws_this_frame += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        engine_debug!(
            "nova3d_demo::Renderer",
            "Frame {} presented ({} draws)",
            self.frame_index,
            self.draws_this_frame
        );
        self.total_draws += u64::from(self.draws_this_frame);
        self.frame_index += 1;
        Ok(())
    }
}

// ===== SCENE SETUP =====

fn build_scene() -> Result<Scene> {
    let (width, height) = INITIAL_SIZE;
    let aspect_ratio = width as f32 / height as f32;
    let mut scene = Scene::new();

    for i in 0..9 {
        let x = i as f32 - 4.0;
        let shade = 0.5 + 0.5 * (i as f32 / 8.0);
        let mut entity = Entity::new(format!("cube_{}", i))
            .with_color_tint(Vec4::new(shade, 1.0 - shade * 0.5, 1.0, 1.0));
        entity.transform_mut().set_position_xyz(x, 0.0, 0.0);
        entity.transform_mut().set_scale_xyz(0.25, 0.25, 0.25);
        scene.create_entity(entity);
    }

    let main = CameraDesc::at(Vec3::new(0.0, 1.0, -6.0)).with_fov_degrees(70.0);
    scene.add_camera(Camera::from_desc(aspect_ratio, &main));
    scene.add_camera(Camera::new(aspect_ratio, Vec3::new(0.0, 0.0, -4.0), Vec3::ZERO));

    scene
        .set_active_camera(0)
        .map_err(|e| Error::InitializationFailed(e.to_string()))?;

    engine_info!(
        SOURCE,
        "Scene ready: {} entities, {} cameras",
        scene.entity_count(),
        scene.camera_count()
    );
    Ok(scene)
}

// ===== SCRIPTED INPUT =====

/// Feed this frame's scripted events into the input state and scene
fn script_frame(frame: u32, input: &mut InputState, scene: &mut Scene) -> Result<()> {
    match frame {
        0 => input.press_key(KeyCode::KeyW),
        30 => {
            input.release_key(KeyCode::KeyW);
            input.press_button(MouseButton::Left);
        }
        60 => {
            input.release_button(MouseButton::Left);
            input.press_key(KeyCode::KeyD);
            input.press_key(KeyCode::KeyE);
            scene.resize(1920, 1080);
        }
        90 => {
            input.release_key(KeyCode::KeyD);
            input.release_key(KeyCode::KeyE);
            input.press_button(MouseButton::Left);
            scene.set_active_camera(1)?;
        }
        100 => scene.resize(0, 0),
        _ => {}
    }

    // Raw motion while dragging: yaw right first, then look up
    if (30..60).contains(&frame) {
        input.handle_device_event(&DeviceEvent::MouseMotion { delta: (8.0, 0.0) });
    } else if frame >= 90 {
        input.handle_device_event(&DeviceEvent::MouseMotion { delta: (0.0, -40.0) });
    }
    Ok(())
}

fn run() -> Result<()> {
    let mut scene = build_scene()?;
    let mut input = InputState::new();
    let mut renderer = LoggingRenderer::default();

    for frame in 0..FRAME_COUNT {
        script_frame(frame, &mut input, &mut scene)?;
        scene.update(FRAME_TIME, &input)?;
        scene.render(&mut renderer)?;
        input.begin_frame();
    }

    for index in 0..scene.camera_count() {
        if let Some(camera) = scene.camera(index) {
            engine_info!(
                SOURCE,
                "Camera {}: position {:?}, forward {:?}, aspect {:.3}",
                index,
                camera.position(),
                camera.forward(),
                camera.aspect_ratio()
            );
        }
    }
    engine_info!(
        SOURCE,
        "Rendered {} frames, {} draws",
        renderer.frame_index,
        renderer.total_draws
    );
    Ok(())
}

fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    let min_severity = if verbose { LogSeverity::Trace } else { LogSeverity::Info };
    Engine::set_logger(DefaultLogger::with_min_severity(min_severity));

    if let Err(e) = run() {
        engine_error!(SOURCE, "Demo failed: {}", e);
        std::process::exit(1);
    }
}
