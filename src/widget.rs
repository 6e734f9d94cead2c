use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use reqwest::Client;

use crate::{
    models::orders::OrderForm,
    orders::{fetch::fetch_orders, render},
};

/// 结果区域。每次状态切换（加载中 / 成功 / 失败）都整体替换内容，
/// 对应页面上那个 id=result 的 div。
#[derive(Debug, Clone, Default)]
pub struct ResultDiv {
    inner: Arc<Mutex<String>>,
}

impl ResultDiv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_inner_html(&self, html: &str) {
        *self.inner.lock().unwrap() = html.to_string();
    }

    pub fn inner_html(&self) -> String {
        self.inner.lock().unwrap().clone()
    }
}

pub struct OrderLookupWidget {
    client: Client,
    base_url: String,
    result_div: ResultDiv,
    // 单调递增的代号，旧请求回来时用它判断结果还算不算数
    generation: AtomicU64,
}

impl OrderLookupWidget {
    pub fn new(base_url: String, result_div: ResultDiv) -> Self {
        Self {
            client: Client::new(),
            base_url,
            result_div,
            generation: AtomicU64::new(0),
        }
    }

    /// 一次完整的查询。先同步放上加载动画再发请求；
    /// 请求结束后只有当自己还是最新一次调用时才写回结果，
    /// 被新调用顶掉的请求照常跑完，但渲染结果直接丢弃。
    pub async fn lookup(&self, form: &OrderForm) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.result_div.set_inner_html(&render::loading());

        let html = match fetch_orders(&self.client, &self.base_url, form).await {
            Ok(data) => render::order_details(&data),
            Err(e) => {
                log::error!("order lookup failed: {}", e);
                render::error(&e.to_string())
            }
        };

        if self.generation.load(Ordering::SeqCst) == token {
            self.result_div.set_inner_html(&html);
        }
    }
}
