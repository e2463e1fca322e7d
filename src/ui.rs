use crate::models::DemoStatus;
use crate::ranking::UNKNOWN_LABEL;

pub fn render_index(status: &DemoStatus) -> String {
    let state = if status.active { "active" } else { "inactive" };
    INDEX_HTML
        .replace("{{DEMO_STATE}}", state)
        .replace("{{SESSION_COUNT}}", &status.session_count.to_string())
        .replace("{{UNKNOWN}}", UNKNOWN_LABEL)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Shisha Log Demo</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #f4f1fb;
      --ink: #24212b;
      --muted: #6b6577;
      --accent: #4f46e5;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 48px rgba(36, 33, 43, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #fdf8f2 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .banner {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
      justify-content: space-between;
      background: #fff7e0;
      border: 1px solid #f5d37a;
      border-radius: 16px;
      padding: 14px 18px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    .grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font: inherit;
      cursor: pointer;
      background: var(--accent);
      color: #fff;
    }

    button.secondary { background: #e5e3ee; color: var(--ink); }

    .calendar { display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; }
    .cell { min-height: 56px; border-radius: 8px; padding: 6px; background: #fff; border: 1px solid #ebe8f2; font-size: 0.85rem; }
    .cell.blank { background: transparent; border: none; }
    .cell.today { border-color: var(--accent); }
    .cell .count { display: inline-block; margin-top: 4px; background: var(--accent); color: #fff; border-radius: 999px; padding: 0 8px; font-size: 0.75rem; }

    .row { display: grid; grid-template-columns: 28px 1fr auto; gap: 8px; align-items: center; margin-bottom: 8px; }
    .bar { height: 6px; background: #e5e3ee; border-radius: 999px; }
    .bar > div { height: 6px; background: var(--accent); border-radius: 999px; }

    .chip { display: inline-block; background: #eef2ff; color: var(--accent); border-radius: 999px; padding: 2px 10px; margin: 2px; font-size: 0.8rem; }
    .muted { color: var(--muted); }
    ul.sessions { list-style: none; margin: 0; padding: 0; display: grid; gap: 10px; }
  </style>
</head>
<body>
  <main class="app">
    <h1>Shisha Log</h1>
    <section class="banner">
      <span>Demo mode is <strong id="demo-state">{{DEMO_STATE}}</strong>, <span id="session-count">{{SESSION_COUNT}}</span> sessions generated in memory.</span>
      <span>
        <button id="regenerate">Regenerate</button>
        <button id="stop" class="secondary">Exit demo</button>
      </span>
    </section>

    <section class="card">
      <div class="banner" style="background:none;border:none;padding:0 0 12px">
        <button class="secondary" id="prev-month">Prev</button>
        <strong id="month-label"></strong>
        <button class="secondary" id="next-month">Next</button>
      </div>
      <div class="calendar" id="calendar"></div>
      <ul class="sessions" id="day-sessions" style="margin-top:16px"></ul>
    </section>

    <section class="grid">
      <div class="card"><h3>Main flavors</h3><div id="rank-main_flavors"></div></div>
      <div class="card"><h3>All flavors</h3><div id="rank-all_flavors"></div></div>
      <div class="card"><h3>Stores</h3><div id="rank-stores"></div></div>
      <div class="card"><h3>Creators</h3><div id="rank-creators"></div></div>
      <div class="card"><h3>Orders</h3><div id="rank-orders"></div></div>
    </section>

    <section class="card">
      <h3>Recent sessions</h3>
      <ul class="sessions" id="recent"></ul>
    </section>
  </main>

  <script>
    const today = new Date();
    let cursor = { year: today.getFullYear(), month: today.getMonth() + 1 };

    const text = (value) => (value === null || value === undefined || value === '' ? '{{UNKNOWN}}' : value);
    const el = (id) => document.getElementById(id);

    async function getJson(url, options) {
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.json()).error || res.statusText);
      }
      return res.json();
    }

    function renderSession(session) {
      const chips = session.flavors
        .map((f) => `<span class="chip">${text(f.flavor_name)}</span>`)
        .join('');
      const when = new Date(session.session_date).toLocaleString();
      return `<li><strong>${when}</strong> <span class="muted">${text(session.store_name)}</span><div>${chips}</div></li>`;
    }

    async function loadCalendar() {
      el('month-label').textContent = `${cursor.year}-${String(cursor.month).padStart(2, '0')}`;
      const grid = await getJson(`/api/demo/calendar/grid?year=${cursor.year}&month=${cursor.month}`);
      el('calendar').innerHTML = grid.cells
        .map((cell) => {
          if (cell.kind === 'blank') {
            return '<div class="cell blank"></div>';
          }
          const badge = cell.count > 0 ? `<div class="count">${cell.count}</div>` : '';
          const today = cell.is_today ? ' today' : '';
          return `<div class="cell${today}" data-date="${cell.date}">${cell.day}${badge}</div>`;
        })
        .join('');
      el('calendar').querySelectorAll('[data-date]').forEach((node) => {
        node.addEventListener('click', () => loadDay(node.dataset.date));
      });
    }

    async function loadDay(date) {
      const sessions = await getJson(`/api/demo/sessions/by-date?date=${date}`);
      el('day-sessions').innerHTML = sessions.length
        ? sessions.map(renderSession).join('')
        : `<li class="muted">No sessions on ${date}</li>`;
    }

    async function loadCharts() {
      for (const dimension of ['main_flavors', 'all_flavors', 'stores', 'creators', 'orders']) {
        const chart = await getJson(`/api/demo/charts/${dimension}`);
        el(`rank-${dimension}`).innerHTML = chart.ranking.length
          ? chart.ranking
              .map((row, i) => `<div class="row" title="${chart.slices[i].label}: ${chart.slices[i].value} (${chart.slices[i].percentage.toFixed(1)}%)">
                  <span class="muted">${row.rank}</span>
                  <div>${row.label}<div class="bar"><div style="width:${row.bar_percent}%"></div></div></div>
                  <span>${row.count}</span>
                </div>`)
              .join('')
          : '<p class="muted">No data</p>';
      }
    }

    async function loadRecent() {
      const sessions = await getJson('/api/demo/sessions?limit=5');
      el('recent').innerHTML = sessions.map(renderSession).join('');
    }

    async function refresh() {
      const status = await getJson('/api/demo');
      el('demo-state').textContent = status.active ? 'active' : 'inactive';
      el('session-count').textContent = status.session_count;
      if (!status.active) {
        return;
      }
      await Promise.all([loadCalendar(), loadCharts(), loadRecent()]);
    }

    el('prev-month').addEventListener('click', () => {
      cursor = cursor.month === 1 ? { year: cursor.year - 1, month: 12 } : { year: cursor.year, month: cursor.month - 1 };
      loadCalendar();
    });

    el('next-month').addEventListener('click', () => {
      cursor = cursor.month === 12 ? { year: cursor.year + 1, month: 1 } : { year: cursor.year, month: cursor.month + 1 };
      loadCalendar();
    });

    el('regenerate').addEventListener('click', async () => {
      await getJson('/api/demo', { method: 'POST' });
      refresh();
    });

    el('stop').addEventListener('click', async () => {
      await getJson('/api/demo', { method: 'DELETE' });
      ['calendar', 'day-sessions', 'recent'].forEach((id) => (el(id).innerHTML = ''));
      refresh();
    });

    refresh().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
