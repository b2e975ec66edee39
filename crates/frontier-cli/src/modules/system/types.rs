/// Everything an authenticated check needs to reach the service. The
/// client carries the session cookie jar.
pub struct ProbeContext<'a> {
    pub client: &'a reqwest::Client,
    pub base_url: &'a str,
}
