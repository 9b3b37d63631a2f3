use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_grouping::io::{write_schedule_file, TeamRoster};
use u_grouping::scheduler::{ScheduleEngine, ScheduleKpi};
use u_grouping::utils::logger;
use u_grouping::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let roster = TeamRoster::from_path(&config.file)
        .with_context(|| format!("failed to read teams from {}", config.file.display()))?;
    let engine_config = config.engine_config()?;
    let engine = ScheduleEngine::new(engine_config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (schedule, stats) = engine
        .run(config.courses, roster.len(), config.teams_per_group, &mut rng)
        .context("schedule generation failed")?;

    for (i, course) in schedule.courses.iter().enumerate() {
        let groups: Vec<String> = course
            .groups()
            .iter()
            .map(|g| {
                g.teams()
                    .iter()
                    .filter_map(|&t| roster.label(t))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect();
        tracing::info!(course = i, "{}", groups.join(" | "));
    }

    let kpi = ScheduleKpi::calculate(&schedule, roster.len());
    tracing::info!(
        pairings = kpi.distinct_pairings,
        coverage = %format!("{:.1}%", kpi.pairing_coverage * 100.0),
        group_sizes = %format!("{}..={}", kpi.min_group_size, kpi.max_group_size),
        restarts = stats.restarts,
        backtracks = stats.backtracks,
        "schedule summary"
    );

    write_schedule_file(&schedule, &roster, &config.out)
        .with_context(|| format!("failed to write {}", config.out.display()))?;
    println!("Schedule saved to: {}", config.out.display());

    Ok(())
}
