//! Request signing.
//!
//! Every call is a form POST whose fields are positional: `var1` holds the
//! function name, `var2..` the parameters in vendor order and `var0` a
//! checksum over all of them plus a shared secret.

use md5::{Digest, Md5};

use crate::constants::{CHECKSUM_FIELD, FUNCTION_FIELD};

/// Lowercase hex MD5 of `function`, each of `params` in order, and `secret`.
pub fn checksum(function: &str, params: &[String], secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(function.as_bytes());
    for param in params {
        hasher.update(param.as_bytes());
    }
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// The positional form fields of a call, checksum included.
pub fn form_fields(function: &str, params: &[String], secret: &str) -> Vec<(String, String)> {
    let mut fields = Vec::with_capacity(params.len() + 2);
    fields.push((FUNCTION_FIELD.to_string(), function.to_string()));
    fields.extend(
        params
            .iter()
            .enumerate()
            .map(|(i, param)| (format!("var{}", i + 2), param.clone())),
    );
    fields.push((
        CHECKSUM_FIELD.to_string(),
        checksum(function, params, secret),
    ));
    fields
}
