/// 日志工具模块
///
/// 提供日志初始化以及格式化输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志，输出到 stderr
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 选择 debug 或 info。
/// 重复调用不会报错（测试中可能多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `output_file`: 输出文件路径
/// - `seed`: 随机种子（若有）
pub fn log_startup(output_file: &str, seed: Option<u64>) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库 SQL 生成模式");
    info!("📄 输出文件: {}", output_file);
    match seed {
        Some(seed) => info!("🎲 随机种子: {}", seed),
        None => info!("🎲 随机种子: 未设置（每次输出不同）"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录目录加载信息
///
/// # 参数
/// - `source`: 目录来源（内置或文件路径）
/// - `categories`: 分类数量
/// - `topics`: 知识点数量
/// - `total`: 题目总数
pub fn log_catalog_loaded(source: &str, categories: usize, topics: usize, total: usize) {
    info!("✓ 已加载题目目录: {}", source);
    info!("📋 {} 个分类, {} 个知识点, 共 {} 题\n", categories, topics, total);
}

/// 记录单个知识点生成完成
pub fn log_topic_generated(category: &str, sub_topic: &str, count: usize) {
    info!("  ✓ [{}] {}: {} 题", category, sub_topic, count);
}

/// 打印最终统计信息
///
/// # 参数
/// - `total_rows`: 生成的总行数
/// - `bytes`: 脚本字节数
/// - `verified`: 是否经过回读校验
/// - `output_file`: 输出文件路径
pub fn print_final_stats(total_rows: usize, bytes: usize, verified: bool, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目总数: {}", total_rows);
    info!("📦 脚本大小: {} 字节", bytes);
    info!("🔍 回读校验: {}", if verified { "通过" } else { "未执行" });
    info!("{}", "=".repeat(60));
    info!("\nSQL 已保存至: {}", output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_chars() {
        assert_eq!(truncate_text("Sample MS Office question 1", 6), "Sample...");
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("题库生成器", 2), "题库...");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
