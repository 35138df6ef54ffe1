//! 构建时根据 src/tests/accounts.toml 生成测试用账号枚举与 env 变量名常量，供 tests 模块 include! 使用。

use std::env;
use std::fs;
use std::path::Path;

fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut c = part.chars();
            match c.next() {
                None => String::new(),
                Some(first) => first
                    .to_uppercase()
                    .chain(c.flat_map(|c| c.to_lowercase()))
                    .collect(),
            }
        })
        .collect()
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let accounts_path = Path::new(&manifest_dir).join("src/tests/accounts.toml");
    println!("cargo:rerun-if-changed=src/tests/accounts.toml");
    println!("cargo:rerun-if-changed=src/tests/env/.env.example");
    // env 目录变化（含删除某账号的 .env 文件）时也重新跑，以便从模板恢复缺失的 {id}.env
    println!("cargo:rerun-if-changed=src/tests/env");

    let account_ids: Vec<String> = fs::read_to_string(&accounts_path)
        .ok()
        .filter(|content| !content.trim().is_empty())
        .and_then(|content| parse_accounts_toml(&content))
        .unwrap_or_default()
        .into_iter()
        .filter(|id| is_valid_id(id))
        .collect();

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("test_accounts.rs");

    let mut enum_variants = String::new();
    let mut as_str_arms = String::new();
    let mut all_array = String::new();

    for id in &account_ids {
        let variant = to_pascal_case(id);
        enum_variants.push_str(&format!("    {},\n", variant));
        as_str_arms.push_str(&format!("            TestAccount::{} => \"{}\",\n", variant, id));
        all_array.push_str(&format!("            TestAccount::{},\n", variant));
    }

    // 若无任何账号则生成一个占位变体，避免空枚举无法编译
    if enum_variants.is_empty() {
        enum_variants = "    #[allow(dead_code)]\n    __None,\n".to_string();
        as_str_arms = "            TestAccount::__None => \"\",\n".to_string();
        all_array = "            TestAccount::__None,\n".to_string();
    }

    let code = format!(
        r#"// 自动生成，请勿手改。账号列表来自 src/tests/accounts.toml

/// 测试可选的 Yandex.Disk 账号，用于在测试中手动选择用哪个 env 配置。
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestAccount {{
{variants}
}}

impl TestAccount {{
    /// 返回账号 id（与 env 文件名 {{id}}.env 对应）。
    pub fn as_str(&self) -> &'static str {{
        match self {{
{as_str}
        }}
    }}

    /// 返回所有已配置的账号，便于多账号轮询测试。
    #[allow(dead_code)]
    pub fn all() -> &'static [TestAccount] {{
        static ALL: &[TestAccount] = &[
{array}
        ];
        ALL
    }}
}}

/// 测试 env 文件中所需的环境变量名。
#[allow(dead_code)]
pub mod env_var_names {{
    /// OAuth 令牌
    pub const YANDEX_DISK_TOKEN: &str = "YANDEX_DISK_TOKEN";
    /// 根前缀，"disk:/" 或 "app:/"，不填默认 "app:/"
    pub const YANDEX_DISK_PREFIX: &str = "YANDEX_DISK_PREFIX";
}}
"#,
        variants = enum_variants,
        as_str = as_str_arms,
        array = all_array,
    );

    fs::write(out_path, code).expect("write test_accounts.rs");

    // 根据账号列表自动生成缺失的 env 文件（从 .env.example 复制），用户只需填写令牌
    let env_dir = Path::new(&manifest_dir).join("src/tests/env");
    let example_path = env_dir.join(".env.example");
    if example_path.exists() {
        let template = fs::read_to_string(&example_path).unwrap_or_default();
        for id in &account_ids {
            let env_file = env_dir.join(format!("{}.env", id));
            if !env_file.exists() {
                fs::write(&env_file, &template).expect("write env file");
            }
        }
    }
}

/// 解析 accounts.toml：支持 accounts = ["a","b"] 或多行 accounts = [ "a", "b" ]
fn parse_accounts_toml(content: &str) -> Option<Vec<String>> {
    let start = content.find("accounts")?;
    let after_key = &content[start + "accounts".len()..];
    let open = after_key.find('[')?;
    let close = after_key[open..].find(']')?;
    let inner = after_key[open + 1..open + close].trim();
    let ids: Vec<String> = inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if ids.is_empty() { None } else { Some(ids) }
}
