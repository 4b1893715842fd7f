use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use light_gamut::{Color, Gamut, GamutKind, XyPoint};
use lightmyroom::fleet;
use lightmyroom::models::encoding;
use lightmyroom::models::{AppConfig, LightConfig};
use lightmyroom::simulator::SimulatedLight;
use lightmyroom::{Light, LightDriver, LightState};

#[derive(Parser)]
#[command(name = "lightmyroom")]
#[command(about = "Gamut-aware control for characteristic-based smart lamps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the gamut triangle used for a model number
    Gamut {
        /// Model number as reported by the lamp (e.g. LCT015)
        model: String,
    },
    /// Convert a hex color to the chromaticity a lamp would be sent
    ToXy {
        /// Hex color, e.g. "#ff8800"
        color: Color,

        /// Clamp to this model's gamut (default: no clamping)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Convert a lamp chromaticity and brightness back to a hex color
    ToRgb {
        x: f64,
        y: f64,

        /// Normalized brightness (0.0..=1.0)
        #[arg(short, long, default_value_t = 1.0)]
        brightness: f64,

        /// Clamp to this model's gamut (default: no clamping)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Apply configured settings to simulated lamps and print their state
    Simulate {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lightmyroom=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gamut { model } => {
            run_gamut_command(&model);
            Ok(())
        }
        Commands::ToXy { color, model } => {
            run_to_xy_command(color, model.as_deref());
            Ok(())
        }
        Commands::ToRgb {
            x,
            y,
            brightness,
            model,
        } => {
            run_to_rgb_command(XyPoint::new(x, y), brightness, model.as_deref());
            Ok(())
        }
        Commands::Simulate { config, json } => run_simulate_command(config, json),
    }
}

fn gamut_for(model: Option<&str>) -> Gamut {
    model.map(Gamut::for_model).unwrap_or(Gamut::FULL)
}

fn run_gamut_command(model: &str) {
    let kind = GamutKind::for_model(model);
    println!("Model {model}: gamut {kind}");
    for (label, vertex) in ["red", "green", "blue"].iter().zip(kind.gamut().vertices()) {
        println!("  {label:<5} x={:.4} y={:.4}", vertex.x, vertex.y);
    }
}

fn run_to_xy_command(color: Color, model: Option<&str>) {
    let gamut = gamut_for(model);
    let xy = gamut.color_to_xy(color);
    println!(
        "{color} -> x={:.6} y={:.6} (wire {})",
        xy.x,
        xy.y,
        hex::encode(encoding::encode_xy(xy))
    );
}

fn run_to_rgb_command(xy: XyPoint, brightness: f64, model: Option<&str>) {
    let gamut = gamut_for(model);
    let clamped = gamut.clamp(xy);
    if clamped != xy {
        println!("clamped to x={:.6} y={:.6}", clamped.x, clamped.y);
    }
    println!("{}", gamut.xy_to_color(xy, brightness));
}

/// Lights used when the configuration lists none
fn demo_lights() -> Vec<LightConfig> {
    vec![
        LightConfig {
            name: "Desk".to_string(),
            model: "LCT015".to_string(),
            power: true,
            brightness: Some(0.5),
            temperature: Some(lightmyroom::light::WARM_WHITE),
            color: None,
        },
        LightConfig {
            name: "Strip".to_string(),
            model: "LST001".to_string(),
            power: true,
            brightness: Some(1.0),
            temperature: None,
            color: Some("#ff0000".to_string()),
        },
    ]
}

fn apply(light: &dyn Light, config: &LightConfig) -> anyhow::Result<LightState> {
    if let Some(names) = light.name_control() {
        names.set_name(&config.name)?;
    }
    if let Some(brightness) = config.brightness {
        light.set_brightness(brightness)?;
    }
    if let (Some(kelvin), Some(temperature)) = (config.temperature, light.temperature_control()) {
        temperature.set_temperature_kelvin(kelvin)?;
    }
    if let Some(hex) = &config.color {
        let color: Color = hex
            .parse()
            .with_context(|| format!("invalid color {hex:?} for light {}", config.name))?;
        let colors = light
            .color_control()
            .with_context(|| format!("light {} has no color control", config.name))?;
        colors.set_color(color)?;
    }
    if config.power {
        light.power_on()?;
    } else {
        light.power_off()?;
    }

    Ok(LightState::read(light)?)
}

fn run_simulate_command(config_path: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = config_path
        .as_deref()
        .map(AppConfig::load_from_path)
        .unwrap_or_default();
    let configs = if config.lights.is_empty() {
        demo_lights()
    } else {
        config.lights.clone()
    };

    let mut lights = Vec::with_capacity(configs.len());
    for light_config in configs {
        let simulated = SimulatedLight::new(&light_config.model);
        let driver = LightDriver::connect_with_config(&simulated, config.transport)?;
        lights.push((driver, light_config));
    }

    let results = fleet::run_multiple(&mut lights, |(driver, light_config)| {
        apply(driver, light_config)
    });

    let mut states = Vec::with_capacity(results.len());
    for ((_, light_config), result) in lights.iter().zip(results) {
        let state = result.with_context(|| format!("light {} failed", light_config.name))?;
        states.push(state);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&states)?);
    } else {
        for state in &states {
            println!(
                "{:<12} model={} power={} brightness={:.2} temperature={} color={}",
                state.name.as_deref().unwrap_or("-"),
                state.model,
                if state.powered { "on" } else { "off" },
                state.brightness,
                state
                    .temperature_kelvin
                    .map(|k| format!("{k}K"))
                    .unwrap_or_else(|| "-".to_string()),
                state.color.as_deref().unwrap_or("-"),
            );
        }
    }

    Ok(())
}
