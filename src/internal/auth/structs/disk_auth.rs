use core::fmt;
use std::sync::Arc;

use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::disk::error::ClientError;

/// Yandex.Disk REST API 的默认根地址
pub const DEFAULT_API_BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk/";

/// 认证结构体
///
/// 该结构体定位
/// - 用于存储 Yandex.Disk 的 OAuth 令牌与 API 根地址
/// - 为 YandexDiskClient 提供已带好认证头的 http 客户端
///
/// 默认Eq时会匹配base_url和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct DiskAuth {
    pub client: Client,     // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // 客户端要在多个任务间共享，所以用Arc
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
    has_token: bool,
}

impl DiskAuth {
    /// 使用默认 API 根地址创建认证结构体
    pub fn new(access_token: &str) -> Result<Self, ClientError> {
        Self::with_base_url(access_token, DEFAULT_API_BASE_URL)
    }

    /// 指定 API 根地址创建认证结构体，一般只有测试或代理场景才需要
    ///
    /// 令牌为空时不会报错，只是不携带认证头，是否允许由上层决定
    pub fn with_base_url(
        access_token: &str,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        let access_token = access_token.trim();
        let http_client = _InternalHttpClient::_create(access_token)?;
        let base_url = _format_base_url(base_url)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            encrypted_token: Arc::new(http_client.encrypted_token),
            has_token: !access_token.is_empty(),
        })
    }

    /// 是否携带了非空的令牌
    pub fn has_token(&self) -> bool {
        self.has_token
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for DiskAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for DiskAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiskAuth")
            .field("client", &"<Client with hidden authorization>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

fn _format_base_url(url: &str) -> Result<Url, ClientError> {
    // 空串同样按地址格式错误处理
    let mut base_url = Url::parse(url.trim())?;

    // join 相对路径时依赖尾部斜杠，否则最后一段会被替换掉
    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化DiskAuth时使用
struct _InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl _InternalHttpClient {
    fn _encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 创建http客户端，内部使用
    fn _create(access_token: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if !access_token.is_empty() {
            let auth_value =
                HeaderValue::from_str(&format!("OAuth {}", access_token))
                    .map_err(|_| ClientError::InvalidHeader)?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        let http_client = Client::builder()
            .default_headers(headers)
            .build()?;

        let encrypted_token = Self::_encrypt_str(access_token);

        Ok(Self { client: http_client, encrypted_token })
    }
}
