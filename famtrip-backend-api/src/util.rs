use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::Result;

const VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Prefer a single JSON object instead of an array.
pub const ACCEPT_OBJECT: &str = "application/vnd.pgrst.object+json";

pub const RETURN_REPRESENTATION: &str = "return=representation";

pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query string of a table request with horizontal and vertical filters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        let value = utf8_percent_encode(value, VALUE);
        self.0.push((column.to_owned(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.0.push(("select".to_owned(), columns.replace(char::is_whitespace, "")));
        self
    }

    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.0.push(("order".to_owned(), format!("{column}.desc")));
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

pub async fn into_empty(response: Response) -> Result<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(into_api_error(response).await)
    }
}

async fn into_api_error(response: Response) -> crate::Error {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return err.into(),
    };
    serde_json::from_str::<famtrip_boundary::Error>(&body)
        .ok()
        .filter(|err| !err.message.is_empty())
        .unwrap_or_else(|| famtrip_boundary::Error {
            message: status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_owned(),
            code: Some(famtrip_boundary::ErrorCode::Status(status.as_u16())),
            details: None,
            hint: None,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_query_string() {
        let q = Query::new()
            .select("*, users ( id, name )")
            .eq("group_id", "a1b2-c3")
            .order_desc("created_at");
        assert_eq!(
            "?select=*,users(id,name)&group_id=eq.a1b2-c3&order=created_at.desc",
            q.to_string()
        );
        assert_eq!("", Query::new().to_string());
    }

    #[test]
    fn encode_filter_values() {
        let q = Query::new().eq("name", "a&b c");
        assert_eq!("?name=eq.a%26b%20c", q.to_string());
    }
}
