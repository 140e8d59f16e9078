/// Browser-like identifier sent with every request. The site throttles or
/// blocks obvious bot agents, so this mirrors a desktop Safari string.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X) AppleWebKit/537.36 (KHTML, like Gecko) Pitch162/0.1 Safari/537.36";

pub(crate) const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.7";
