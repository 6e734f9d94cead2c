use crate::models::orders::OrderForm;

/// 拼出 `/orders?order_id=..[&from_date=..][&until_date=..]`。
/// 值原样拼进去，不做 URL 编码；日期参数只在对应输入非空时追加，
/// 顺序固定 from_date 在前。
pub fn build_query(form: &OrderForm) -> String {
    let mut url = format!("/orders?order_id={}", form.order_id);
    if !form.from_date.is_empty() {
        url += &format!("&from_date={}", form.from_date);
    }
    if !form.until_date.is_empty() {
        url += &format!("&until_date={}", form.until_date);
    }
    url
}
