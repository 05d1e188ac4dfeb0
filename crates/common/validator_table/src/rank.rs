use crate::projection::ValidatorView;

/// Order views by name (byte-wise, stable for equal names) and keep at most
/// `limit` of them. The input is left untouched.
pub fn rank(views: &[ValidatorView], limit: Option<usize>) -> Vec<ValidatorView> {
    let mut ranked = views.to_vec();
    ranked.sort_by(|a, b| a.name.cmp(&b.name));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
