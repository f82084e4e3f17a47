use anyhow::anyhow;
use web_sys as web;

// Styles for elements this crate creates or animates; the page stylesheet
// does not know about them.

pub const NOTIFICATION_CSS: &str = r#"
.notification {
  position: fixed;
  top: 20px;
  right: 20px;
  background: var(--card-bg);
  border-left: 4px solid var(--primary-color);
  padding: 15px 20px;
  border-radius: 10px;
  box-shadow: var(--shadow-hover);
  display: flex;
  align-items: center;
  gap: 15px;
  z-index: 9999;
  transform: translateX(120%);
  transition: transform 0.3s cubic-bezier(0.68, -0.55, 0.27, 1.55);
  max-width: 350px;
  backdrop-filter: blur(10px);
  border: 1px solid var(--glass-border);
}
.notification.show { transform: translateX(0); }
.notification.success { border-left-color: #4ade80; }
.notification i { font-size: 1.5rem; }
.notification.success i { color: #4ade80; }
.notification span { flex: 1; color: var(--text-color); font-weight: 500; }
.notification-close {
  background: none;
  border: none;
  color: var(--text-light);
  cursor: pointer;
  padding: 5px;
  border-radius: 5px;
  transition: var(--transition);
}
.notification-close:hover { color: var(--accent-color); background: rgba(247, 37, 133, 0.1); }
"#;

pub const ANIMATION_CSS: &str = r#"
.theme-changing { animation: themeChange 0.3s ease; }
@keyframes themeChange { 0% { opacity: 1; } 50% { opacity: 0.7; } 100% { opacity: 1; } }
.slide-in { animation: slideIn 0.5s ease forwards; }
@keyframes slideIn {
  from { opacity: 0; transform: translateY(-10px); }
  to { opacity: 1; transform: translateY(0); }
}
.form-group.focused label,
.form-group.has-value label { transform: translateY(-25px) scale(0.85); color: var(--primary-color); }
.success { animation: successPulse 2s ease; }
@keyframes successPulse {
  0% { box-shadow: 0 0 0 0 rgba(67, 97, 238, 0.4); }
  70% { box-shadow: 0 0 0 20px rgba(67, 97, 238, 0); }
  100% { box-shadow: 0 0 0 0 rgba(67, 97, 238, 0); }
}
.fade-in-child { opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease; }
.fade-in-child.visible { opacity: 1; transform: translateY(0); }
button:active { transform: scale(0.95); }
a { transition: all 0.3s ease; }
a:hover { color: var(--primary-color); }
.profile-img:hover { filter: grayscale(0) contrast(1.2); transform: scale(1.02); }
.social-icon:hover i { animation: iconWobble 0.5s ease; }
@keyframes iconWobble { 0%, 100% { transform: rotate(0deg); } 25% { transform: rotate(-15deg); } 75% { transform: rotate(15deg); } }
.skill-progress.animated { animation: skillBarFill 1.5s cubic-bezier(0.68, -0.55, 0.27, 1.55) forwards; }
@keyframes skillBarFill { from { width: 0; } }
"#;

pub const KONAMI_CSS: &str = r#"
@keyframes rainbow { 0% { background-position: 0% 50%; } 100% { background-position: 100% 50%; } }
.card.konami {
  animation: rainbow 2s linear infinite;
  background: linear-gradient(90deg, #ff0000, #ff8000, #ffff00, #80ff00, #00ff80, #00ffff, #0080ff, #0000ff, #8000ff, #ff00ff, #ff0080);
  background-size: 1000% 100%;
}
"#;

pub const TOOLTIP_CSS: &str = r#"
.tooltip {
  position: fixed;
  background: var(--text-color);
  color: var(--bg-color);
  padding: 8px 16px;
  border-radius: 8px;
  font-size: 0.9rem;
  font-weight: 500;
  white-space: nowrap;
  pointer-events: none;
  opacity: 0;
  transform: translateX(-50%) translateY(-80%);
  transition: opacity 0.3s ease, transform 0.3s ease;
  z-index: 10000;
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
}
.tooltip::after {
  content: '';
  position: absolute;
  top: 100%;
  left: 50%;
  transform: translateX(-50%);
  border-width: 6px;
  border-style: solid;
  border-color: var(--text-color) transparent transparent transparent;
}
.tooltip.visible { opacity: 1; transform: translateX(-50%) translateY(-100%); }
"#;

fn inject(document: &web::Document, css: &str) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow!("no head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("create <style>: {e:?}"))?;
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| anyhow!("append <style>: {e:?}"))?;
    Ok(())
}

pub fn inject_all(document: &web::Document) -> anyhow::Result<()> {
    for css in [NOTIFICATION_CSS, ANIMATION_CSS, KONAMI_CSS, TOOLTIP_CSS] {
        inject(document, css)?;
    }
    Ok(())
}
