use clap::Parser;
use std::path::PathBuf;
use terragen::{GenerationParams, generate_world};

/// Генератор тайловой местности
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: PathBuf,

    /// Путь для сохранения карты местности (по умолчанию: ./terrain.png)
    #[arg(short, long, default_value = "terrain.png")]
    output: PathBuf,

    /// Дополнительно сохранить карту высот в градациях серого
    #[arg(long)]
    heightmap: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    println!("🔍 Загрузка конфигурации...");
    let params = GenerationParams::from_toml_file(cli.config.to_str().unwrap())?;

    println!(
        "Генерация мира {}×{} (сид {})...",
        params.rows, params.columns, params.seed
    );
    let grid = generate_world(&params)?;

    println!("Сохранение в {:?}", cli.output);
    grid.save_as_png(cli.output.to_str().unwrap())?;

    if let Some(path) = &cli.heightmap {
        println!("Сохранение карты высот в {path:?}");
        grid.save_heightmap_png(path.to_str().unwrap())?;
    }

    println!("\nГотово! Карта сохранена.");
    Ok(())
}
