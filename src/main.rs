mod errors;
mod models;
mod orders;
mod widget;

use dotenvy::dotenv;
use models::orders::OrderForm;
use std::env;
use widget::{OrderLookupWidget, ResultDiv};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // log
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let base_url =
        env::var("ORDERS_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

    // 表单的三个输入框：order_id 必填，日期区间可以留空
    let form = OrderForm {
        order_id: env::var("ORDER_ID").expect("Please set ORDER_ID"),
        from_date: env::var("FROM_DATE").unwrap_or_default(),
        until_date: env::var("UNTIL_DATE").unwrap_or_default(),
    };

    let result_div = ResultDiv::new();
    let widget = OrderLookupWidget::new(base_url, result_div.clone());
    widget.lookup(&form).await;

    println!("{}", result_div.inner_html());
}
