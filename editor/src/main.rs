mod camera;
mod constants;
mod water;

use std::path::PathBuf;

use bevy::{prelude::*, window::PresentMode};
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_rapier3d::prelude::*;
use clap::Parser;
use constants::WINDOW_TITLE;
use water::WaterPlugin;
use water_shared::{
    config::WaterConfig, CONFIG_FILE_NAME, CONFIG_LOAD_ERROR, CONFIG_WRITE_ERROR,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        help = "Water configuration file (RON), defaults to ./water.ron"
    )]
    config: Option<PathBuf>,

    #[arg(long, help = "Override the configured surface width")]
    width: Option<f32>,

    #[arg(long, help = "Override the configured surface height")]
    height: Option<f32>,

    #[arg(
        short = 'n',
        long,
        help = "Override the number of vertices along X (2-500)"
    )]
    resolution: Option<u32>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_default_config: bool,

    /// Draw rapier colliders, including the water trigger segment
    #[arg(long)]
    debug_colliders: bool,
}

fn main() {
    let args = Args::parse();
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if args.write_default_config {
        if let Err(err) = WaterConfig::default().save(&config_path) {
            eprintln!("{}: {err}", CONFIG_WRITE_ERROR);
            std::process::exit(1);
        }
        println!("Wrote default water config to {}", config_path.display());
        return;
    }

    let mut config = match WaterConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} ({}): {err}", CONFIG_LOAD_ERROR, config_path.display());
            std::process::exit(1);
        }
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(resolution) = args.resolution {
        config.x_vertices = resolution;
    }

    println!(
        "Starting water editor: {} x {} surface, {} vertices along X",
        config.width, config.height, config.x_vertices
    );

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: false,
    })
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default());

    if args.debug_colliders {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    app.insert_resource(config)
        .add_plugins(WaterPlugin)
        .add_systems(Startup, camera::setup_camera)
        .run();
}
