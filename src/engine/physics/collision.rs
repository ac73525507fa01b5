use super::body::Body;

/// A body pair whose collision was resolved during the last step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the first body (always lower than `second`)
    pub first: usize,
    /// Index of the second body
    pub second: usize,
    /// Magnitude of the impulse applied along the contact normal
    pub impulse: f32,
    /// Overlap removed by positional correction
    pub penetration: f32,
}

/// Resolve every colliding pair (i < j) with impulse-based restitution.
///
/// Pairs that merely touch, share the exact same center, or are already
/// separating are skipped. Resolved pairs are appended to `contacts`.
pub fn resolve_pairs(bodies: &mut [Body], restitution: f32, contacts: &mut Vec<Contact>) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            // split_at_mut gives us both bodies mutably
            let (head, tail) = bodies.split_at_mut(j);
            if let Some(contact) = resolve_pair(&mut head[i], &mut tail[0], restitution) {
                contacts.push(Contact {
                    first: i,
                    second: j,
                    ..contact
                });
            }
        }
    }
}

/// Resolve a single pair; returns the contact (with placeholder indices) if resolved
fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) -> Option<Contact> {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    // Touching is not colliding
    if distance >= min_distance {
        return None;
    }

    // Coincident centers have no normal; later steps separate them
    if distance <= 0.0 || !distance.is_finite() {
        return None;
    }

    let normal = delta / distance;
    let approach = (b.velocity - a.velocity).dot(normal);

    // Separating or sliding past each other
    if approach >= 0.0 {
        return None;
    }

    let impulse = -(1.0 + restitution) * approach / (a.inverse_mass() + b.inverse_mass());
    a.velocity -= normal * (impulse * a.inverse_mass());
    b.velocity += normal * (impulse * b.inverse_mass());

    // Split the overlap evenly so the pair doesn't sink into each other
    let penetration = min_distance - distance;
    let correction = normal * (penetration * 0.5);
    a.position -= correction;
    b.position += correction;

    Some(Contact {
        first: 0,
        second: 0,
        impulse,
        penetration,
    })
}
