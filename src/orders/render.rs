use serde_json::Value;

use crate::models::orders::OrderResponse;

/// 居中的加载动画，请求发出去之前先占住结果区域
pub fn loading() -> String {
    r#"
        <div class="flex justify-center items-center">
            <div class="loader ease-linear rounded-full border-4 border-t-4 border-gray-200 h-12 w-12 mb-4"></div>
        </div>
    "#
    .to_string()
}

/// 成功响应渲染成订单卡片列表：标题 + 每条明细一张卡 + 汇总卡。
/// 明细顺序按响应里的顺序，不重排。
pub fn order_details(data: &OrderResponse) -> String {
    let details = data
        .order_details
        .iter()
        .map(|detail| {
            format!(
                r#"
        <div class="bg-white shadow-md rounded-lg p-4 mb-4">
            <p><strong>Order ID:</strong> {}</p>
            <p><strong>Items:</strong> {}</p>
            <p><strong>Time:</strong> {}</p>
        </div>
    "#,
                text(&detail.order_id),
                text(&detail.items),
                text(&detail.time)
            )
        })
        .collect::<String>();

    format!(
        r#"
        <div>
            <h2 class="text-xl font-bold mb-4">Order Details</h2>
            {}
            <div class="bg-white shadow-md rounded-lg p-4">
                <p><strong>Total Items:</strong> {}</p>
                <p><strong>Total Time:</strong> {}</p>
            </div>
        </div>
    "#,
        details,
        text(&data.total_items),
        text(&data.total_time)
    )
}

pub fn error(msg: &str) -> String {
    format!(r#"<div class="text-red-500">Error: {}</div>"#, escape_html(msg))
}

// 服务端返回的内容不可信，进 HTML 之前一律转义。
// 原来的前端是直接插值的，这里不照搬那个漏洞。
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// 字符串裸着显示（不带 JSON 引号），数字走 to_string，Null 显示为空
fn text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => escape_html(s),
        other => escape_html(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::orders::OrderDetail;
    use serde_json::json;

    fn detail(order_id: &str, items: f64, time: &str) -> OrderDetail {
        OrderDetail {
            order_id: json!(order_id),
            items: json!(items),
            time: json!(time),
        }
    }

    fn card_count(html: &str) -> usize {
        html.matches("<p><strong>Order ID:</strong>").count()
    }

    #[test]
    fn one_card_per_detail_in_response_order() {
        let data = OrderResponse {
            order_details: vec![
                detail("5609", 3.0, "0 days 0 hours 15 minutes"),
                detail("5610", 1.0, "0 days 0 hours 5 minutes"),
            ],
            total_items: json!(4.0),
            total_time: json!("0 days 0 hours 20 minutes"),
        };
        let html = order_details(&data);

        assert_eq!(card_count(&html), 2);
        let first = html.find("5609").unwrap();
        let second = html.find("5610").unwrap();
        assert!(first < second);
        assert!(html.contains("<p><strong>Items:</strong> 3.0</p>"));
        assert!(html.contains("<p><strong>Total Items:</strong> 4.0</p>"));
        assert!(html.contains("0 days 0 hours 20 minutes"));
    }

    #[test]
    fn empty_details_renders_heading_and_summary_only() {
        let data = OrderResponse {
            order_details: vec![],
            total_items: json!(0),
            total_time: json!("0 days 0 hours 0 minutes"),
        };
        let html = order_details(&data);

        assert_eq!(card_count(&html), 0);
        assert!(html.contains("Order Details"));
        assert!(html.contains("Total Items:"));
        assert!(html.contains("Total Time:"));
    }

    #[test]
    fn missing_fields_render_as_empty_text() {
        let data: OrderResponse = serde_json::from_str(r#"{"order_details":[{}]}"#).unwrap();
        let html = order_details(&data);

        assert_eq!(card_count(&html), 1);
        assert!(html.contains("<p><strong>Order ID:</strong> </p>"));
        assert!(html.contains("<p><strong>Total Items:</strong> </p>"));
    }

    #[test]
    fn server_fields_are_html_escaped() {
        let data = OrderResponse {
            order_details: vec![detail("<script>alert(1)</script>", 1.0, "a & b")],
            total_items: json!("\"1\""),
            total_time: json!(""),
        };
        let html = order_details(&data);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;1&quot;"));
    }

    #[test]
    fn error_fragment_contains_prefixed_message() {
        let html = error("not found");
        assert!(html.contains("Error: not found"));
        assert!(html.contains("text-red-500"));
    }

    #[test]
    fn loading_fragment_is_a_spinner() {
        assert!(loading().contains("loader"));
    }
}
