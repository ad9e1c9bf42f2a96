use crate::changes::ChangeGenerator;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::summary::RunSummary;
use crate::workflow::run::run_all;

pub async fn run(ctx: &AppContext, config: &AppConfig) -> RunSummary {
    let mut generator = ChangeGenerator::new(ctx.options);
    run_all(ctx, &config.repositories, &mut generator).await
}
