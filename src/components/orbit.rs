use yew::prelude::*;
use yew_hooks::prelude::*;
use crate::config::CONFIG;

pub const MOBILE_BREAKPOINT: f64 = 640.0;
pub const MOBILE_RADIUS: f64 = 85.0;
pub const DESKTOP_RADIUS: f64 = 105.0;

/// Points for `count` bubbles spread evenly on a circle of `radius`,
/// starting at angle 0 and going clockwise in screen space.
pub fn orbit_positions(count: usize, radius: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|index| {
            let angle = (360.0 / count as f64) * index as f64;
            let theta = angle.to_radians();
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

pub fn radius_for_width(width: f64) -> f64 {
    if width < MOBILE_BREAKPOINT {
        MOBILE_RADIUS
    } else {
        DESKTOP_RADIUS
    }
}

#[function_component(RoleBubbleOrbit)]
pub fn role_bubble_orbit() -> Html {
    // Re-renders on every window resize
    let (width, _) = use_window_size();
    let radius = radius_for_width(width);
    let roles = CONFIG.profile.roles;

    html! {
        <div class="orbit">
            <div class="orbit__ring spin-slow">
                {
                    for roles.iter().zip(orbit_positions(roles.len(), radius)).map(|(role, (x, y))| {
                        html! {
                            <div class="orbit__slot" style={format!("transform: translate({:.2}px, {:.2}px);", x, y)}>
                                <div class="orbit__bubble spin-slow-reverse">
                                    <div class="orbit__shine"></div>
                                    <span class="orbit__emoji">{role.emoji}</span>
                                    <span class="orbit__label">{role.text}</span>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
            <style>
                {r#"
                .orbit {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                    z-index: 10;
                }
                .orbit__ring {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .orbit__slot {
                    position: absolute;
                    width: 0;
                    height: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .orbit__bubble {
                    pointer-events: auto;
                    cursor: default;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    width: 64px;
                    height: 64px;
                    padding: 0 4px;
                    background: rgba(255, 255, 255, 0.35);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    border-radius: 50%;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }
                .orbit__bubble:hover {
                    scale: 1.1;
                    background: rgba(255, 255, 255, 0.5);
                }
                .orbit__shine {
                    position: absolute;
                    top: 8px;
                    left: 12px;
                    width: 33%;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.6);
                    border-radius: 9999px;
                    filter: blur(1px);
                }
                .orbit__emoji {
                    font-size: 1.125rem;
                    line-height: 1;
                    margin-bottom: 2px;
                }
                .orbit__label {
                    font-size: 7px;
                    font-weight: 700;
                    color: #111827;
                    line-height: 1;
                    text-transform: uppercase;
                    letter-spacing: 0.025em;
                    max-width: 50px;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn points_sit_on_the_circle() {
        for &count in &[1usize, 5, 8] {
            for &radius in &[MOBILE_RADIUS, DESKTOP_RADIUS, 1.0] {
                let points = orbit_positions(count, radius);
                assert_eq!(points.len(), count);
                for point in points {
                    assert!((distance(point, (0.0, 0.0)) - radius).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn points_are_equally_spaced() {
        for &count in &[5usize, 8] {
            let points = orbit_positions(count, 105.0);
            let chord = distance(points[0], points[1]);
            for i in 0..count {
                let next = points[(i + 1) % count];
                assert!((distance(points[i], next) - chord).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn single_point_starts_at_zero_angle() {
        let points = orbit_positions(1, 85.0);
        assert!((points[0].0 - 85.0).abs() < EPS);
        assert!(points[0].1.abs() < EPS);
    }

    #[test]
    fn no_roles_no_points() {
        assert!(orbit_positions(0, 105.0).is_empty());
    }

    #[test]
    fn radius_switches_at_breakpoint() {
        assert_eq!(radius_for_width(375.0), MOBILE_RADIUS);
        assert_eq!(radius_for_width(639.9), MOBILE_RADIUS);
        assert_eq!(radius_for_width(640.0), DESKTOP_RADIUS);
        assert_eq!(radius_for_width(1440.0), DESKTOP_RADIUS);
    }
}
