use gloo_net::http::{Request, RequestBuilder};

/// Creates an admin API request that asks for a JSON response
pub fn admin_request(method: &str, url: &str) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url), // Default to GET
    };

    req.header("Accept", "application/json")
}

pub fn admin_get(url: &str) -> RequestBuilder {
    admin_request("GET", url)
}

pub fn admin_post(url: &str) -> RequestBuilder {
    admin_request("POST", url)
}

pub fn admin_put(url: &str) -> RequestBuilder {
    admin_request("PUT", url)
}
