use anyhow::Result;
use copa_question_bank::utils::logging;
use copa_question_bank::{App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let merge = config.merge.clone();
    let app = App::new(config);

    // 配置了合并输入时执行双语合并，否则生成题库脚本
    match merge {
        Some(sources) => {
            app.run_merge(&sources).await?;
        }
        None => {
            app.run().await?;
        }
    }

    Ok(())
}
