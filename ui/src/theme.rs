pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #05090f;
  --bg-elev-1: #0b111a;
  --panel: #0d1520;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);
  --text: #e6edf7;
  --text-dim: #b7c6d9;
  --text-muted: #7f8ba0;
  --accent: #f7c843;
  --accent-strong: #ffd966;
  --surface-hover: rgba(255, 255, 255, 0.05);
  --shadow-soft: 0 14px 42px rgba(0, 0, 0, 0.38);
  --radius: 10px;
  --radius-pill: 999px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --font-size-xs: 11px;
  --font-size-sm: 13px;
  --font-size-md: 15px;
  --transition: 140ms ease-out;
  --breakpoint-sm: 640px;
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-sm);
  line-height: 1.4;
  min-height: 100%;
}

a { color: var(--text-dim); text-decoration: none; }
a:hover { color: var(--accent-strong); }

button {
  font-family: var(--font-body);
  cursor: pointer;
}

.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: var(--bg-elev-1);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  max-width: 1120px;
  margin: 0 auto;
  padding: var(--space-3) var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.logo-link { display: inline-flex; align-items: center; }
.logo-link img { height: 32px; width: auto; cursor: pointer; }

.nav-list {
  display: flex;
  flex-direction: row;
  gap: var(--space-6);
  margin: 0;
  padding: 0;
  list-style: none;
  font-weight: 500;
}

.nav-link {
  color: var(--text-dim);
  transition: color var(--transition);
}
.nav-link:hover { color: var(--accent); }
.nav-link.active { color: var(--text); }

.user-menu { position: relative; }

.menu-trigger {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  background: none;
  border: none;
  color: var(--text);
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius);
}
.menu-trigger:hover { background: var(--surface-hover); }

.avatar {
  position: relative;
  height: 32px;
  width: 32px;
  border-radius: var(--radius-pill);
  overflow: hidden;
  background: var(--accent);
  color: var(--bg);
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-weight: 600;
}
.avatar.avatar-lg { height: 40px; width: 40px; }
.avatar img {
  position: absolute;
  inset: 0;
  height: 100%;
  width: 100%;
  object-fit: cover;
}
.avatar-fallback { font-size: var(--font-size-sm); }

.menu-panel {
  display: none;
  position: absolute;
  right: 0;
  top: calc(100% + var(--space-2));
  min-width: 220px;
  background: var(--panel);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: var(--space-2);
}
.menu-panel.open { display: block; }

.menu-identity {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-2);
}
.identity-name { font-size: var(--font-size-md); color: var(--text); }
.identity-email { font-size: var(--font-size-xs); color: var(--text-muted); }

.menu-separator {
  height: 1px;
  margin: var(--space-2) 0;
  background: var(--border-strong);
  border: none;
}

.menu-item {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  width: 100%;
  padding: var(--space-2);
  background: none;
  border: none;
  border-radius: var(--radius);
  color: var(--text-dim);
  text-align: left;
}
.menu-item:hover { background: var(--surface-hover); color: var(--accent); }

/* Below the small breakpoint the header nav collapses and the user menu
   carries a compact copy of the same links. */
.menu-nav { display: none; }
.menu-nav .nav-list {
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-2);
}

@media (max-width: 640px) {
  .header-nav { display: none; }
  .menu-nav { display: block; }
  .trigger-name { display: none; }
  .menu-separator.wide-only { display: none; }
}

main.page-content {
  max-width: 1120px;
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
}
"#;
