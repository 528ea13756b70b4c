use crate::error::{AppError, AppResult, ConfigError};
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输出的 SQL 文件路径
    pub output_file: String,
    /// 自定义题目目录（TOML），为空时使用内置 COPA 目录
    pub catalog_file: Option<String>,
    /// 随机种子，设置后输出可复现
    pub rng_seed: Option<u64>,
    /// 写入后是否回读校验行数
    pub verify_output: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 双语合并的输入；设置后执行合并而不是生成
    pub merge: Option<MergeSources>,
}

/// 双语合并的两份输入脚本
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeSources {
    pub english_file: String,
    pub hindi_file: String,
    /// 题库类型，写入头部注释（Theory / Practical）
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: "insert_question_bank_auto.sql".to_string(),
            catalog_file: None,
            rng_seed: None,
            verify_output: true,
            verbose_logging: false,
            merge: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Ok(Self {
            output_file: lookup("OUTPUT_FILE").unwrap_or(default.output_file),
            catalog_file: non_empty(&lookup, "CATALOG_FILE"),
            rng_seed: parse_var(&lookup, "RNG_SEED", "u64")?,
            verify_output: parse_var(&lookup, "VERIFY_OUTPUT", "bool")?
                .unwrap_or(default.verify_output),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
            merge: merge_sources(&lookup)?,
        })
    }
}

fn non_empty<F>(lookup: &F, var_name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var_name).filter(|v| !v.trim().is_empty())
}

/// `MERGE_ENGLISH_FILE` 与 `MERGE_HINDI_FILE` 必须同时设置
fn merge_sources<F>(lookup: &F) -> AppResult<Option<MergeSources>>
where
    F: Fn(&str) -> Option<String>,
{
    let english = non_empty(lookup, "MERGE_ENGLISH_FILE");
    let hindi = non_empty(lookup, "MERGE_HINDI_FILE");
    match (english, hindi) {
        (None, None) => Ok(None),
        (Some(english_file), Some(hindi_file)) => Ok(Some(MergeSources {
            english_file,
            hindi_file,
            label: non_empty(lookup, "MERGE_LABEL").unwrap_or_else(|| "Theory".to_string()),
        })),
        (Some(_), None) => Err(ConfigError::EnvVarNotFound {
            var_name: "MERGE_HINDI_FILE".to_string(),
        }
        .into()),
        (None, Some(_)) => Err(ConfigError::EnvVarNotFound {
            var_name: "MERGE_ENGLISH_FILE".to_string(),
        }
        .into()),
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.output_file, "insert_question_bank_auto.sql");
        assert!(config.catalog_file.is_none());
        assert!(config.rng_seed.is_none());
        assert!(config.verify_output);
        assert!(!config.verbose_logging);
        assert!(config.merge.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("OUTPUT_FILE", "out/bank.sql"),
            ("CATALOG_FILE", "catalog.toml"),
            ("RNG_SEED", "42"),
            ("VERIFY_OUTPUT", "false"),
            ("VERBOSE_LOGGING", "true"),
        ]))
        .unwrap();
        assert_eq!(config.output_file, "out/bank.sql");
        assert_eq!(config.catalog_file.as_deref(), Some("catalog.toml"));
        assert_eq!(config.rng_seed, Some(42));
        assert!(!config.verify_output);
        assert!(config.verbose_logging);
    }

    #[test]
    fn blank_catalog_file_means_builtin() {
        let config = Config::from_lookup(lookup_from(&[("CATALOG_FILE", "  ")])).unwrap();
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn bad_seed_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("RNG_SEED", "abc")])).unwrap_err();
        match err {
            AppError::Config(ConfigError::EnvVarParseFailed { var_name, value, .. }) => {
                assert_eq!(var_name, "RNG_SEED");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn merge_sources_need_both_files() {
        let config = Config::from_lookup(lookup_from(&[
            ("MERGE_ENGLISH_FILE", "en.sql"),
            ("MERGE_HINDI_FILE", "hi.sql"),
        ]))
        .unwrap();
        assert_eq!(
            config.merge,
            Some(MergeSources {
                english_file: "en.sql".to_string(),
                hindi_file: "hi.sql".to_string(),
                label: "Theory".to_string(),
            })
        );

        let labelled = Config::from_lookup(lookup_from(&[
            ("MERGE_ENGLISH_FILE", "en.sql"),
            ("MERGE_HINDI_FILE", "hi.sql"),
            ("MERGE_LABEL", "Practical"),
        ]))
        .unwrap();
        assert_eq!(labelled.merge.unwrap().label, "Practical");

        let err = Config::from_lookup(lookup_from(&[("MERGE_ENGLISH_FILE", "en.sql")])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarNotFound { ref var_name }) if var_name == "MERGE_HINDI_FILE"
        ));
    }
}
