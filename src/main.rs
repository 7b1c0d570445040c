use fissure::{AppError, CrackAnalysisService, Frame};
use tower::ServiceExt;
use tracing::{info, Level};

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();

    let Some(path) = std::env::args().nth(1) else {
        info!("Usage: fissure <image-path>");
        return Ok(());
    };

    let frame = Frame::from_path(&path)?;
    let service = CrackAnalysisService::new();
    let assessed = service.oneshot(frame).await?;

    let a = &assessed.assessment;
    println!("{} {}", a.damage_type.marker(), a.damage_type.display_name());
    println!("  {}", a.damage_type.symptoms());
    println!("  Severity:       {:.0}%", a.severity_percent);
    println!("  Crack width:    {:.1} mm", a.measurement.width_mm);
    println!("  Crack length:   {:.1} cm", a.measurement.length_cm);
    println!("  Crack area:     {:.1} cm²", a.measurement.area_cm2);
    println!("  {}", a.recommendation);

    Ok(())
}
